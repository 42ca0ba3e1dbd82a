//! The two significance tests the simulation compares
//!
//! - Welch's two-sample t-test (unequal variances), applied to every
//!   unordered pair of groups; the minimum p-value across pairs is the
//!   uncorrected multiple-comparisons decision statistic.
//! - One-way ANOVA, the omnibus test pooling all groups at once.
//!
//! p-values come from the Student-t and Fisher-Snedecor distributions in
//! `statrs` and are clamped to [0, 1] against floating-point spill.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::{Result, SimError};

/// Result of one Welch two-sample test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WelchTest {
    /// t-statistic
    pub statistic: f64,
    /// Welch-Satterthwaite degrees of freedom (fractional in general)
    pub df: f64,
    /// Two-tailed p-value in [0, 1]
    pub p_value: f64,
}

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaTest {
    /// F-statistic (ratio of between- to within-group mean squares)
    pub f_statistic: f64,
    /// Between-groups degrees of freedom, k - 1
    pub df_between: usize,
    /// Within-groups degrees of freedom, N - k
    pub df_within: usize,
    /// p-value in [0, 1]
    pub p_value: f64,
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance (n - 1 denominator).
fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64
}

fn clamp_p(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Welch's t-test for two independent samples with unequal variances.
///
/// Degenerate inputs (both samples with zero variance) make the standard
/// error vanish and the statistic undefined; this is reported as
/// `SimError::DegenerateGroups` rather than a NaN p-value.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTest> {
    let n1 = a.len() as f64;
    let n2 = b.len() as f64;

    let var1 = variance(a);
    let var2 = variance(b);

    let v1 = var1 / n1;
    let v2 = var2 / n2;
    let se_sq = v1 + v2;
    if !(se_sq > 0.0) || !se_sq.is_finite() {
        return Err(SimError::DegenerateGroups {
            context: "two-sample test",
        });
    }

    let t = (mean(a) - mean(b)) / se_sq.sqrt();

    // Welch-Satterthwaite approximation
    let df = se_sq.powi(2) / (v1 * v1 / (n1 - 1.0) + v2 * v2 / (n2 - 1.0));

    let Ok(dist) = StudentsT::new(0.0, 1.0, df) else {
        return Err(SimError::DegenerateGroups {
            context: "two-sample test",
        });
    };
    let p_value = clamp_p(2.0 * dist.sf(t.abs()));

    Ok(WelchTest {
        statistic: t,
        df,
        p_value,
    })
}

/// All C(k, 2) pairwise Welch p-values in lexicographic (i, j) order,
/// i < j. The fixed order keeps results reproducible for a fixed seed.
pub fn pairwise_p_values(groups: &[Vec<f64>]) -> Result<Vec<f64>> {
    let k = groups.len();
    let mut p_values = Vec::with_capacity(k * (k - 1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            p_values.push(welch_t_test(&groups[i], &groups[j])?.p_value);
        }
    }
    Ok(p_values)
}

/// Minimum p-value over all pairwise comparisons for one trial.
///
/// This is the quantity whose distribution demonstrates the
/// multiple-comparisons problem: the minimum over more comparisons skews
/// toward smaller values even under the null.
pub fn min_pairwise_p(groups: &[Vec<f64>]) -> Result<f64> {
    let p_values = pairwise_p_values(groups)?;
    Ok(p_values.into_iter().fold(f64::INFINITY, f64::min))
}

/// One-way ANOVA over `k >= 2` groups.
///
/// Pools all observations, partitions total variance into between- and
/// within-group components, and refers F = MS_between / MS_within to the
/// F-distribution with (k - 1, N - k) degrees of freedom.
pub fn one_way_anova(groups: &[Vec<f64>]) -> Result<AnovaTest> {
    let k = groups.len();
    let total_n: usize = groups.iter().map(Vec::len).sum();

    let grand_sum: f64 = groups.iter().flatten().sum();
    let grand_mean = grand_sum / total_n as f64;

    let group_means: Vec<f64> = groups.iter().map(|g| mean(g)).collect();

    let ss_between: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &gm)| g.len() as f64 * (gm - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, &gm)| g.iter().map(|&x| (x - gm).powi(2)).sum::<f64>())
        .sum();

    let df_between = k - 1;
    let df_within = total_n - k;

    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;

    if !(ms_within > 0.0) || !ms_within.is_finite() {
        return Err(SimError::DegenerateGroups {
            context: "variance-ratio test",
        });
    }

    let f_statistic = ms_between / ms_within;
    let Ok(dist) = FisherSnedecor::new(df_between as f64, df_within as f64) else {
        return Err(SimError::DegenerateGroups {
            context: "variance-ratio test",
        });
    };
    let p_value = clamp_p(dist.sf(f_statistic));

    Ok(AnovaTest {
        f_statistic,
        df_between,
        df_within,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welch_detects_clear_difference() {
        let a = [5.1, 4.9, 5.2, 5.0, 4.8];
        let b = [7.1, 6.9, 7.2, 7.0, 6.8];
        let result = welch_t_test(&a, &b).unwrap();

        assert!(result.p_value < 0.01);
        assert!(result.statistic < 0.0);
    }

    #[test]
    fn test_welch_accepts_identical_means() {
        let a = [2.0, 4.0, 6.0, 8.0];
        let b = [3.0, 5.0, 5.0, 7.0];
        let result = welch_t_test(&a, &b).unwrap();

        assert!(result.p_value > 0.5);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_welch_degenerate_groups() {
        let a = [1.0, 1.0, 1.0];
        let b = [2.0, 2.0, 2.0];

        assert_eq!(
            welch_t_test(&a, &b),
            Err(SimError::DegenerateGroups {
                context: "two-sample test"
            })
        );
    }

    #[test]
    fn test_anova_detects_clear_difference() {
        let groups = vec![
            vec![5.0, 6.0, 7.0, 5.5, 6.5],
            vec![8.0, 9.0, 8.5, 9.5, 8.0],
            vec![4.0, 3.0, 3.5, 4.5, 4.0],
        ];
        let result = one_way_anova(&groups).unwrap();

        assert!(result.p_value < 0.01);
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 12);
    }

    #[test]
    fn test_anova_degenerate_groups() {
        let groups = vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]];

        assert_eq!(
            one_way_anova(&groups),
            Err(SimError::DegenerateGroups {
                context: "variance-ratio test"
            })
        );
    }

    #[test]
    fn test_pairwise_enumeration_order_and_count() {
        // 4 groups -> 6 pairs in lexicographic order
        let groups = vec![
            vec![0.0, 1.0, 2.0],
            vec![0.5, 1.5, 2.5],
            vec![0.2, 1.2, 2.4],
            vec![0.7, 1.9, 2.8],
        ];
        let p_values = pairwise_p_values(&groups).unwrap();

        assert_eq!(p_values.len(), 6);
        assert!(p_values.iter().all(|p| (0.0..=1.0).contains(p)));

        let expected = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
            .iter()
            .map(|&(i, j)| welch_t_test(&groups[i], &groups[j]).unwrap().p_value)
            .collect::<Vec<_>>();
        assert_eq!(p_values, expected);

        let min = min_pairwise_p(&groups).unwrap();
        assert_eq!(min, expected.iter().copied().fold(f64::INFINITY, f64::min));
    }

    /// With two groups of equal size and identical sample variance, the
    /// Welch df reduces to n1 + n2 - 2 and the two-group ANOVA satisfies
    /// F = t^2 with the same p-value.
    #[test]
    fn test_two_group_f_equals_t_squared() {
        let a = vec![1.2, -0.4, 0.7, 2.1, -1.3, 0.2, 0.9, -0.8];
        // Shifted copy: identical variance, different mean
        let b: Vec<f64> = a.iter().map(|x| x + 0.75).collect();
        let groups = vec![a.clone(), b.clone()];

        let t = welch_t_test(&a, &b).unwrap();
        let f = one_way_anova(&groups).unwrap();

        assert!((f.f_statistic - t.statistic * t.statistic).abs() < 1e-9);
        assert!((f.p_value - t.p_value).abs() < 1e-9);
        assert!((t.df - (a.len() + b.len() - 2) as f64).abs() < 1e-9);
    }
}
