/*
 * @Description  : Sigmoid 及其导数的单元测试
 */

use crate::nn::{dsigmoid, sigmoid};
use approx::assert_abs_diff_eq;

#[test]
fn test_sigmoid_basic() {
    assert_eq!(sigmoid(0.0), 0.5);
    assert_abs_diff_eq!(sigmoid(1.0), 0.731_058_578_630_004_9, epsilon = 1e-12);
    assert_abs_diff_eq!(sigmoid(-1.0), 0.268_941_421_369_995_1, epsilon = 1e-12);
}

#[test]
fn test_sigmoid_symmetry() {
    for x in [0.1, 0.5, 2.0, 7.5] {
        assert_abs_diff_eq!(sigmoid(-x), 1.0 - sigmoid(x), epsilon = 1e-12);
    }
}

#[test]
fn test_sigmoid_saturates_without_nan() {
    // 极端输入只会饱和，不会产生 NaN
    assert_eq!(sigmoid(1000.0), 1.0);
    assert_eq!(sigmoid(-1000.0), 0.0);
    assert!(!sigmoid(f64::MAX).is_nan());
    assert!(!sigmoid(f64::MIN).is_nan());
}

#[test]
fn test_dsigmoid_takes_sigmoided_value() {
    assert_eq!(dsigmoid(0.5), 0.25);
    assert_eq!(dsigmoid(0.0), 0.0);
    assert_eq!(dsigmoid(1.0), 0.0);

    // 与数值微分对照
    let x = 0.3;
    let h = 1e-6;
    let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
    assert_abs_diff_eq!(dsigmoid(sigmoid(x)), numeric, epsilon = 1e-9);
}
