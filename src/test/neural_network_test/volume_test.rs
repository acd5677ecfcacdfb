use super::*;

#[test]
fn test_volume_size_coords_inverse_of_linear_index() {
    let size = VolumeSize::new(11, 13, 37);

    for i in 0..size.len() {
        let (x, y, z) = size.coords(i);
        assert!(x < size.x && y < size.y && z < size.z);
        assert_eq!(size.linear_index(x, y, z), i);
    }
}

#[test]
fn test_volume_data_axes_are_z_y_x() {
    let size = VolumeSize::new(2, 3, 4);
    let volume = Tensor::new(size);

    assert_eq!(volume.data().shape(), &[4, 3, 2]);
    assert!(volume.data().is_standard_layout());
}

#[test]
fn test_volume_data_mut_writes_through() {
    let size = VolumeSize::new(3, 1, 2);
    let mut volume = Tensor::new(size);

    volume.data_mut()[[1, 0, 2]] = 5.0;

    assert_eq!(volume[(2, 0, 1)], 5.0);
    assert_eq!(volume[size.linear_index(2, 0, 1)], 5.0);
}
