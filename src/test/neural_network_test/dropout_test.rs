use super::*;
use crate::neural_network::layer::regularization_layer::dropout_layer::is_retained;

#[test]
fn test_is_retained_inclusive_threshold() {
    // A draw equal to the probability is kept
    assert!(is_retained(0.5, 0.5));
    assert!(is_retained(0.25, 0.5));
    assert!(!is_retained(0.5000001, 0.5));
}

#[test]
fn test_is_retained_zero_probability_rejects_zero_draw() {
    assert!(!is_retained(0.0, 0.0));
    assert!(!is_retained(0.3, 0.0));
}

#[test]
fn test_is_retained_full_probability_keeps_every_draw() {
    for draw in [0.0, 0.1, 0.5, 0.999_999_9] {
        assert!(is_retained(draw, 1.0));
    }
}

#[test]
fn test_split_mut_exposes_owned_buffers() {
    let size = VolumeSize::new(2, 2, 2);
    let mut buffers = LayerBuffers::new(size, size);

    let (input, output, input_gradient) = buffers.split_mut();
    input.fill(1.0);
    output.fill(2.0);
    input_gradient.fill(3.0);

    assert!(buffers.input().iter().all(|&v| v == 1.0));
    assert!(buffers.output().iter().all(|&v| v == 2.0));
    assert!(buffers.input_gradient().iter().all(|&v| v == 3.0));
}

#[test]
fn test_activate_with_rng_matches_owned_generator() {
    let size = VolumeSize::new(5, 6, 7);
    let input = Tensor::from_shape_fn(size, |(x, y, z)| (x * 100 + y * 10 + z) as f32 + 1.0);

    let mut owned = Dropout::new_with_seed(size, 0.4, 9).unwrap();
    owned.activate(&input).unwrap();

    let mut borrowed = Dropout::new(size, 0.4).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    borrowed.activate_with_rng(&input, &mut rng).unwrap();

    assert_eq!(owned, borrowed);
}
