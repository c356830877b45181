use crate::math::vec3::Vec3;

// Corners of a tilted quad inside the default frustum (depth 1..2).
pub const QUAD_VERTICES: [Vec3; 4] = [
    Vec3::new(1.0, -1.0, 1.5),
    Vec3::new(1.0, 1.0, 1.1),
    Vec3::new(-1.0, 1.0, 1.5),
    Vec3::new(-1.0, -1.0, 1.9),
];

// Both halves share the edge from vertex 0 to vertex 2 and are wound the
// same way.
pub const QUAD_TRIANGLES: [[Vec3; 3]; 2] = [
    [QUAD_VERTICES[0], QUAD_VERTICES[1], QUAD_VERTICES[2]],
    [QUAD_VERTICES[0], QUAD_VERTICES[2], QUAD_VERTICES[3]],
];
