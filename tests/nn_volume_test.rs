use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Uniform;
use rustycnn::error::LayerError;
use rustycnn::neural_network::{Mask, Tensor, Volume, VolumeSize};

#[test]
fn test_volume_linear_order() {
    // x varies fastest, z slowest
    let size = VolumeSize::new(2, 3, 4);
    let volume = Tensor::from_shape_fn(size, |(x, y, z)| size.linear_index(x, y, z) as f32);

    let values: Vec<f32> = volume.iter().copied().collect();
    let expected: Vec<f32> = (0..size.len()).map(|i| i as f32).collect();
    assert_eq!(values, expected);
    assert_eq!(volume.as_slice().unwrap(), expected.as_slice());
}

#[test]
fn test_volume_indexing_agrees() {
    let size = VolumeSize::new(11, 13, 37);
    let volume = Volume::from_shape_fn(size, |(x, y, z)| (x, y, z));

    for i in 0..size.len() {
        let (x, y, z) = size.coords(i);
        assert_eq!(volume[i], (x, y, z));
        assert_eq!(volume[(x, y, z)], (x, y, z));
        assert_eq!(volume.get(x, y, z), Some(&(x, y, z)));
    }
    assert_eq!(volume.get(11, 0, 0), None);
    assert_eq!(volume.get(0, 0, 37), None);
}

#[test]
#[should_panic]
fn test_volume_linear_index_out_of_range_panics() {
    let volume = Tensor::new(VolumeSize::new(2, 2, 2));
    let _ = volume[8];
}

#[test]
fn test_volume_index_mut() {
    let size = VolumeSize::new(3, 3, 3);
    let mut volume = Tensor::new(size);

    volume[(1, 2, 0)] = 4.0;
    volume[size.linear_index(2, 0, 2)] = 9.0;

    assert_eq!(volume[size.linear_index(1, 2, 0)], 4.0);
    assert_eq!(volume[(2, 0, 2)], 9.0);
    assert_eq!(volume.iter().filter(|&&v| v != 0.0).count(), 2);
}

#[test]
fn test_volume_defaults() {
    let size = VolumeSize::new(3, 4, 5);

    let tensor = Tensor::new(size);
    let mask = Mask::new(size);

    assert_eq!(tensor.len(), 60);
    assert_eq!(tensor.size(), size);
    assert!(tensor.iter().all(|&v| v == 0.0));
    assert!(mask.iter().all(|&m| !m));
}

#[test]
fn test_volume_from_vec() {
    let size = VolumeSize::new(2, 2, 1);

    let volume = Tensor::from_vec(size, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(volume[(1, 1, 0)], 4.0);

    let result = Tensor::from_vec(size, vec![1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(LayerError::InvalidParameter(_))));
}

#[test]
fn test_volume_assign() {
    let size = VolumeSize::new(2, 3, 2);
    let source = Tensor::from_shape_fn(size, |(x, y, z)| (x + y + z) as f32);
    let mut target = Tensor::new(size);

    target.assign(&source).unwrap();
    assert_eq!(target, source);

    let other = Tensor::from_elem(VolumeSize::new(3, 2, 2), 7.0);
    let result = target.assign(&other);
    assert_eq!(
        result,
        Err(LayerError::SizeMismatch {
            expected: size,
            got: VolumeSize::new(3, 2, 2),
        })
    );
    assert_eq!(target, source);
}

#[test]
fn test_volume_equality_includes_size() {
    // Same element count, different shape
    let a = Tensor::new(VolumeSize::new(2, 3, 1));
    let b = Tensor::new(VolumeSize::new(3, 2, 1));

    assert_ne!(a, b);
    assert_eq!(a, Tensor::new(VolumeSize::new(2, 3, 1)));
}

#[test]
fn test_volume_random_using_is_seeded() {
    let size = VolumeSize::new(5, 5, 5);
    let distribution = Uniform::new(0.0f32, 1.0).unwrap();

    let a = Tensor::random_using(size, &distribution, &mut StdRng::seed_from_u64(3));
    let b = Tensor::random_using(size, &distribution, &mut StdRng::seed_from_u64(3));
    let c = Tensor::random_using(size, &distribution, &mut StdRng::seed_from_u64(4));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_volume_total_memory_size() {
    let size = VolumeSize::new(4, 4, 4);

    let tensor = Tensor::new(size);
    let mask = Mask::new(size);

    assert_eq!(
        tensor.total_memory_size(),
        std::mem::size_of::<Tensor>() + 64 * std::mem::size_of::<f32>()
    );
    assert_eq!(
        mask.total_memory_size(),
        std::mem::size_of::<Mask>() + 64 * std::mem::size_of::<bool>()
    );
}

#[test]
fn test_volume_size_display() {
    assert_eq!(VolumeSize::new(11, 13, 37).to_string(), "(11, 13, 37)");
    assert!(VolumeSize::new(1, 0, 1).is_empty());
    assert_eq!(VolumeSize::new(1, 1, 1).len(), 1);
}
