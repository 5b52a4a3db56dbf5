pub type Weight = u32;
pub type VertexId = usize;

pub const INFINITY: Weight = u32::MAX / 2;
