/*
 * @Description  : Network::predict 的单元测试
 */

use crate::assert_err;
use crate::errors::{Argument, NetworkError};
use crate::nn::Network;

#[test]
fn test_predict_matches_feed_forward() {
    let mut net = Network::new_seeded(4, 6, 3, 13);
    let inputs = vec![vec![2.0, 3.0, 5.0, 6.0], vec![5.2, 4.9, 2.0, 0.1]];

    let predictions = net.predict(&inputs).unwrap();
    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0], net.feed_forward(&inputs[0]).unwrap());
    assert_eq!(predictions[1], net.feed_forward(&inputs[1]).unwrap());
}

#[test]
fn test_predict_does_not_train() {
    let mut net = Network::new_seeded(4, 6, 3, 13);
    let input_weights = net.input_weights().clone();
    net.predict(&[vec![1.0, 1.0, 1.0, 1.0]]).unwrap();
    assert_eq!(net.input_weights(), &input_weights);
}

#[test]
fn test_predict_empty() {
    let mut net = Network::new_seeded(4, 6, 3, 13);
    assert!(net.predict(&[]).unwrap().is_empty());
}

#[test]
fn test_predict_wrong_input_len() {
    let mut net = Network::new_seeded(4, 6, 3, 13);
    let inputs = vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0]];
    assert_err!(
        net.predict(&inputs),
        NetworkError::InvalidArgument(Argument::Inputs, 4, 2)
    );
}
