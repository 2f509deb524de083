use voxplot_core::geom::{point3, vector3};
use voxplot_layout::model::ElementPlacement;
use voxplot_layout::{BoundingVolume, PlaneFace, Primitive, PrimitiveShape, VolumeShape};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn cube_at(x: f64, y: f64, z: f64, s: f64) -> Primitive {
    Primitive::new(
        "cube",
        PrimitiveShape::Cube,
        ElementPlacement {
            position: point3(x, y, z),
            scale: vector3(s, s, s),
        },
    )
}

#[test]
fn bounds_are_the_union_of_element_bounds() {
    let elements = [cube_at(0.0, 0.0, 0.0, 2.0), cube_at(4.0, 1.0, -1.0, 2.0)];
    let bounds = BoundingVolume::compute_bounds(&elements).expect("bounds");
    assert_eq!(bounds.min, point3(-1.0, -1.0, -2.0));
    assert_eq!(bounds.max, point3(5.0, 2.0, 1.0));

    assert!(BoundingVolume::compute_bounds(&[]).is_none());
}

#[test]
fn cube_volume_pads_each_side() {
    let elements = [cube_at(0.0, 0.0, 0.0, 2.0), cube_at(4.0, 1.0, -1.0, 2.0)];
    let volume = BoundingVolume::initialize(&elements, VolumeShape::Cube);
    assert_eq!(volume.center, point3(2.0, 0.5, -0.5));
    assert!(close(volume.size.x, 6.01));
    assert!(close(volume.size.y, 3.01));
    assert!(close(volume.size.z, 3.01));
}

#[test]
fn cylinder_volume_uses_the_wider_footprint_and_half_height() {
    let elements = [Primitive::new(
        "box",
        PrimitiveShape::Cube,
        ElementPlacement {
            position: point3(0.0, 0.0, 0.0),
            scale: vector3(2.0, 4.0, 3.0),
        },
    )];
    let volume = BoundingVolume::initialize(&elements, VolumeShape::Cylinder);
    assert_eq!(volume.size, vector3(3.0, 2.0, 3.0));
}

#[test]
fn empty_input_gives_a_zero_volume_at_the_origin() {
    let volume = BoundingVolume::initialize(&[], VolumeShape::Cube);
    assert_eq!(volume.center, point3(0.0, 0.0, 0.0));
    assert_eq!(volume.size, vector3(0.0, 0.0, 0.0));
    assert_eq!(volume.frame().to_local(point3(3.0, 4.0, 5.0)), point3(0.0, 0.0, 0.0));
}

#[test]
fn coordinate_frame_round_trips() {
    let volume = BoundingVolume::fixed(
        VolumeShape::Cube,
        point3(1.0, 2.0, 3.0),
        vector3(2.0, 4.0, 8.0),
    );
    let frame = volume.frame();
    assert_eq!(frame.origin, point3(0.0, 0.0, -1.0));
    assert_eq!(frame.to_local(point3(1.0, 2.0, 3.0)), point3(0.5, 0.5, 0.5));
    assert_eq!(frame.to_world(point3(1.0, 1.0, 1.0)), point3(2.0, 4.0, 7.0));

    let p = point3(0.3, 1.7, 2.2);
    let back = frame.to_world(frame.to_local(p));
    assert!(close(back.x, p.x) && close(back.y, p.y) && close(back.z, p.z));
}

#[test]
fn grid_planes_cover_bottom_back_and_right() {
    let volume = BoundingVolume::fixed(
        VolumeShape::Cube,
        point3(0.0, 1.0, 0.0),
        vector3(2.0, 2.0, 4.0),
    );
    let planes = volume.grid_planes();
    let faces: Vec<PlaneFace> = planes.iter().map(|p| p.face).collect();
    assert_eq!(faces, vec![PlaneFace::Bottom, PlaneFace::Back, PlaneFace::Right]);

    assert_eq!(planes[0].center, point3(0.0, 0.0, 0.0));
    assert_eq!(planes[0].scale, vector3(2.0, 0.01, 4.0));
    assert_eq!(planes[1].center, point3(0.0, 1.0, 2.0));
    assert_eq!(planes[1].rotation, vector3(0.0, 90.0, 90.0));
    assert_eq!(planes[2].center, point3(1.0, 1.0, 0.0));
    assert_eq!(planes[2].scale, vector3(4.0, 0.01, 2.0));
}

#[test]
fn axis_lines_run_along_the_volume_edges() {
    let volume = BoundingVolume::fixed(
        VolumeShape::Cube,
        point3(0.0, 0.0, 0.0),
        vector3(2.0, 2.0, 2.0),
    );
    let lines = volume.axis_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].start, point3(-1.0, -1.0, 1.0));
    assert_eq!(lines[0].end, point3(-1.0, 1.0, 1.0));
    assert_eq!(lines[1].start, point3(-1.0, -1.0, -1.0));
    assert_eq!(lines[1].end, point3(-1.0, -1.0, 1.0));
    assert_eq!(lines[2].end, point3(1.0, -1.0, -1.0));
}
