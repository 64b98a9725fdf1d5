use crate::render::data::Triangle;

/// Groups `vertices` into triangles by walking `indices` three at a time.
///
/// A trailing partial group is dropped, as is any triangle referencing a
/// vertex past the end of the buffer.
pub fn assemble<'a, T: Copy + 'a>(
    vertices: Vec<T>,
    indices: &'a [u32],
) -> impl Iterator<Item = Triangle<T>> + 'a {
    indices.chunks_exact(3).filter_map(move |chunk| {
        let vertex = |index: u32| vertices.get(index as usize).copied();
        Some(Triangle::new(vertex(chunk[0])?, vertex(chunk[1])?, vertex(chunk[2])?))
    })
}
