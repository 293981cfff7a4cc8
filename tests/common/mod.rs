//! Common test fixtures and data generators.

/// The reference dataset used throughout the inference tests: 8
/// observations of 2 predictors plus an intercept column.
///
/// R check:
/// ```r
/// y  <- c(12.4, 11.7, 12.4, 10.8, 9.4, 9.5, 8.0, 7.5)
/// x1 <- c(28.0, 28.0, 32.5, 39.0, 45.9, 57.8, 58.1, 62.5)
/// x2 <- c(18, 14, 24, 22, 8, 16, 1, 0)
/// summary(lm(y ~ x1 + x2))
/// ```
pub fn reference_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let y = vec![12.4, 11.7, 12.4, 10.8, 9.4, 9.5, 8.0, 7.5];
    let x1 = [28.0, 28.0, 32.5, 39.0, 45.9, 57.8, 58.1, 62.5];
    let x2 = [18.0, 14.0, 24.0, 22.0, 8.0, 16.0, 1.0, 0.0];

    let xs = x1
        .iter()
        .zip(x2.iter())
        .map(|(&a, &b)| vec![1.0, a, b])
        .collect();

    (xs, y)
}

/// Generate rows for y = intercept + Σ (j+1)·xⱼ plus deterministic noise.
/// Rows carry a leading 1 for the intercept.
pub fn generate_linear_rows(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let mut next_rand = move || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut xs = Vec::with_capacity(n_samples);
    let mut ys = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let mut row = vec![1.0];
        let mut yi = intercept;
        for j in 0..n_features {
            let xij = next_rand();
            yi += (j + 1) as f64 * xij;
            row.push(xij);
        }
        yi += noise_std * next_rand();
        xs.push(row);
        ys.push(yi);
    }

    (xs, ys)
}
