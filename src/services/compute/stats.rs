use crate::error::Error;
use crate::models::Sample;

/// Column-wise mean and standard deviation over a batch of trials,
/// returned as (mean row, stdev row). The deviation uses the
/// population denominator N, so a single trial aggregates to zero
/// spread rather than failing.
pub fn aggregate(samples: &[Sample]) -> Result<(Sample, Sample), Error> {
    if samples.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let count = samples.len() as f64;
    let mut mean = [0.0f64; 7];
    let mut stdev = [0.0f64; 7];

    for column in 0..7 {
        let values: Vec<f64> = samples.iter().map(|sample| sample.to_row()[column]).collect();

        let sum: f64 = values.iter().sum();
        let column_mean = sum / count;
        let variance = values
            .iter()
            .map(|&value| (value - column_mean).powi(2))
            .sum::<f64>()
            / count;

        mean[column] = column_mean;
        stdev[column] = variance.sqrt();
    }

    Ok((Sample::from_row(mean), Sample::from_row(stdev)))
}
