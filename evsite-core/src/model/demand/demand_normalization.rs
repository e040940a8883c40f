use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

/// rescales raw demand so that optimizer objectives are comparable across requests of
/// different size and resolution.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemandNormalization {
    /// divide by the largest covered value. zero stays zero.
    #[default]
    Max,
    /// map the covered range [min, max] onto [0, 1]
    MinMax,
    /// log1p transform followed by [`DemandNormalization::Max`]
    Log,
    /// keep raw values
    Raw,
}

impl std::fmt::Display for DemandNormalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            DemandNormalization::Max => "max",
            DemandNormalization::MinMax => "min_max",
            DemandNormalization::Log => "log",
            DemandNormalization::Raw => "raw",
        };
        write!(f, "{key}")
    }
}

impl DemandNormalization {
    /// normalizes raw samples. uncovered samples (None) become zero, as do negative or
    /// non-finite values. when every covered value is equal and positive, each covered
    /// sample normalizes to one.
    pub fn apply(&self, raw: &[Option<f64>]) -> Vec<f64> {
        let cleaned = raw
            .iter()
            .map(|v| v.map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 }))
            .collect_vec();
        match self {
            DemandNormalization::Raw => cleaned.iter().map(|v| v.unwrap_or(0.0)).collect(),
            DemandNormalization::Max => scale_by_max(&cleaned),
            DemandNormalization::Log => {
                let logged = cleaned.iter().map(|v| v.map(f64::ln_1p)).collect_vec();
                scale_by_max(&logged)
            }
            DemandNormalization::MinMax => {
                let (min, max) = match cleaned.iter().flatten().minmax() {
                    MinMaxResult::NoElements => return vec![0.0; cleaned.len()],
                    MinMaxResult::OneElement(v) => (*v, *v),
                    MinMaxResult::MinMax(min, max) => (*min, *max),
                };
                cleaned
                    .iter()
                    .map(|v| match v {
                        None => 0.0,
                        Some(_) if max <= min => {
                            if max > 0.0 {
                                1.0
                            } else {
                                0.0
                            }
                        }
                        Some(v) => (v - min) / (max - min),
                    })
                    .collect()
            }
        }
    }
}

fn scale_by_max(values: &[Option<f64>]) -> Vec<f64> {
    let max = values.iter().flatten().fold(0.0_f64, |acc, v| acc.max(*v));
    values
        .iter()
        .map(|v| match v {
            Some(v) if max > 0.0 => v / max,
            _ => 0.0,
        })
        .collect()
}
