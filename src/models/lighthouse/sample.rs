use crate::error::Error;
use crate::models::lighthouse::report::Report;

/// Column labels, in the same order as [`Sample::to_row`].
pub const COLUMNS: [&str; 7] = ["Score", "FCP", "SI", "LCP", "TTI", "TBT", "CLS"];

/// The seven metrics pulled out of one trial's report. Score is a
/// fraction in [0, 1]; FCP, SI, LCP, TTI and TBT are milliseconds;
/// CLS is dimensionless.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub score: f64,
    pub fcp: f64,
    pub si: f64,
    pub lcp: f64,
    pub tti: f64,
    pub tbt: f64,
    pub cls: f64,
}

impl Sample {
    /// Validate a raw report once and extract the metrics. Reports
    /// that lack any of the seven fields are rejected here rather
    /// than surfacing as bogus numbers later.
    pub fn from_report(report: &Report) -> Result<Self, Error> {
        let score = report
            .categories
            .performance
            .as_ref()
            .and_then(|category| category.score)
            .ok_or(Error::MalformedReport {
                field: "categories.performance.score",
            })?;

        Ok(Self {
            score,
            fcp: numeric_value(report, "first-contentful-paint")?,
            si: numeric_value(report, "speed-index")?,
            lcp: numeric_value(report, "largest-contentful-paint")?,
            tti: numeric_value(report, "interactive")?,
            tbt: numeric_value(report, "total-blocking-time")?,
            cls: numeric_value(report, "cumulative-layout-shift")?,
        })
    }

    pub fn to_row(&self) -> [f64; 7] {
        [
            self.score, self.fcp, self.si, self.lcp, self.tti, self.tbt, self.cls,
        ]
    }

    pub fn from_row(row: [f64; 7]) -> Self {
        let [score, fcp, si, lcp, tti, tbt, cls] = row;
        Self {
            score,
            fcp,
            si,
            lcp,
            tti,
            tbt,
            cls,
        }
    }
}

fn numeric_value(report: &Report, field: &'static str) -> Result<f64, Error> {
    report
        .audits
        .get(field)
        .and_then(|audit| audit.numeric_value)
        .ok_or(Error::MalformedReport { field })
}
