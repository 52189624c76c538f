//! 업종 태그와 업종별 평가 가중치.
//! 비용 계산에는 관여하지 않고 기능/규제 점수의 가중 평균에만 쓰인다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vendor::Vendor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    General,
    Healthcare,
    Financial,
    Government,
    Education,
    Retail,
    Manufacturing,
    Technology,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::General,
        Industry::Healthcare,
        Industry::Financial,
        Industry::Government,
        Industry::Education,
        Industry::Retail,
        Industry::Manufacturing,
        Industry::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::General => "general",
            Industry::Healthcare => "healthcare",
            Industry::Financial => "financial",
            Industry::Government => "government",
            Industry::Education => "education",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
            Industry::Technology => "technology",
        }
    }

    /// 업종별 가중치. 기능 6항목 + 규제 6항목의 합이 1 이다.
    pub fn weights(&self) -> ScoreWeights {
        match self {
            Industry::General => ScoreWeights {
                features: [0.10, 0.10, 0.10, 0.10, 0.10, 0.10],
                compliance: [0.0667, 0.0667, 0.0666, 0.0667, 0.0667, 0.0666],
            },
            Industry::Healthcare => ScoreWeights {
                features: [0.10, 0.05, 0.08, 0.12, 0.05, 0.05],
                compliance: [0.30, 0.02, 0.10, 0.05, 0.05, 0.03],
            },
            Industry::Financial => ScoreWeights {
                features: [0.12, 0.05, 0.05, 0.03, 0.05, 0.05],
                compliance: [0.02, 0.30, 0.10, 0.08, 0.10, 0.05],
            },
            Industry::Government => ScoreWeights {
                features: [0.15, 0.05, 0.05, 0.05, 0.05, 0.05],
                compliance: [0.02, 0.03, 0.40, 0.03, 0.05, 0.07],
            },
            Industry::Education => ScoreWeights {
                features: [0.08, 0.15, 0.15, 0.12, 0.10, 0.15],
                compliance: [0.02, 0.03, 0.05, 0.10, 0.02, 0.03],
            },
            Industry::Retail => ScoreWeights {
                features: [0.10, 0.10, 0.10, 0.10, 0.08, 0.12],
                compliance: [0.0, 0.30, 0.03, 0.05, 0.02, 0.0],
            },
            Industry::Manufacturing => ScoreWeights {
                features: [0.12, 0.05, 0.18, 0.30, 0.10, 0.08],
                compliance: [0.0, 0.0, 0.10, 0.02, 0.0, 0.05],
            },
            Industry::Technology => ScoreWeights {
                features: [0.15, 0.20, 0.05, 0.05, 0.15, 0.15],
                compliance: [0.0, 0.03, 0.05, 0.05, 0.10, 0.02],
            },
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Industry::ALL
            .into_iter()
            .find(|i| i.as_str() == key)
            .ok_or_else(|| format!("알 수 없는 업종: {s}"))
    }
}

/// 기능: zero trust, cloud native, agentless, IoT, 자동화, 확장성
/// 규제: HIPAA, PCI DSS, NIST, GDPR, SOC2, ISO 27001
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub features: [f64; 6],
    pub compliance: [f64; 6],
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.features.iter().chain(self.compliance.iter()).sum()
    }
}

/// 업종 가중치로 벤더 점수의 가중 평균(0~100)을 구한다.
pub fn weighted_score(vendor: &Vendor, industry: Industry) -> f64 {
    let f = &vendor.scores.features;
    let c = &vendor.scores.compliance;
    let features = [
        f.zero_trust,
        f.cloud_native,
        f.agentless,
        f.iot_coverage,
        f.automation,
        f.scalability,
    ];
    let compliance = [c.hipaa, c.pci_dss, c.nist, c.gdpr, c.soc2, c.iso27001];
    let w = industry.weights();

    let weighted: f64 = features
        .iter()
        .zip(w.features.iter())
        .chain(compliance.iter().zip(w.compliance.iter()))
        .map(|(score, weight)| score * weight)
        .sum();
    let total_weight = w.sum();
    if total_weight > 0.0 {
        weighted / total_weight
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        for industry in Industry::ALL {
            let sum = industry.weights().sum();
            assert!((sum - 1.0).abs() < 1e-6, "{industry}: {sum}");
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Healthcare".parse::<Industry>(), Ok(Industry::Healthcare));
        assert!("aerospace".parse::<Industry>().is_err());
    }
}
