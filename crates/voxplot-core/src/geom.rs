pub type Unit = euclid::UnknownUnit;

pub type Point3 = euclid::Point3D<f64, Unit>;
pub type Vector3 = euclid::Vector3D<f64, Unit>;
pub type Size3 = euclid::Size3D<f64, Unit>;
pub type Bounds3 = euclid::Box3D<f64, Unit>;

pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    euclid::point3(x, y, z)
}

pub fn vector3(x: f64, y: f64, z: f64) -> Vector3 {
    euclid::vec3(x, y, z)
}

pub fn size3(width: f64, height: f64, depth: f64) -> Size3 {
    euclid::size3(width, height, depth)
}
