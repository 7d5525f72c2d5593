use lidarseg_core::{Error, LabeledCloud, RandomSource, Result};

/// Row indices that bring `n` points to exactly `k`.
///
/// With `n >= k` this is a uniform subset of `k` distinct rows. With `n < k`
/// every row is kept in its original order, followed by `k - n` rows drawn
/// with replacement.
///
/// # Errors
///
/// [`Error::InvalidTargetCount`] when `k == 0`, [`Error::EmptyPointSet`] when `n == 0`.
pub fn resample_indices<R: RandomSource + ?Sized>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(Error::InvalidTargetCount(k));
    }
    if n == 0 {
        return Err(Error::EmptyPointSet);
    }

    if n >= k {
        return Ok(rng.choose_distinct(n, k));
    }

    let mut idx: Vec<usize> = (0..n).collect();
    idx.extend(rng.choose_with_replacement(n, k - n));
    Ok(idx)
}

/// Subsample or pad `cloud` to exactly `k` rows, keeping labels aligned.
pub fn resample<R: RandomSource + ?Sized>(
    cloud: &LabeledCloud,
    k: usize,
    rng: &mut R,
) -> Result<LabeledCloud> {
    let idx = resample_indices(cloud.len(), k, rng)?;
    Ok(cloud.select(&idx))
}
