//! Triangle adjacency graph construction.

use crate::figure::Figure;

use super::types::{LinkedTri, TriId};

/// Build one node per mesh triangle and link the pairs sharing exactly two
/// vertex indices. O(T²) over T triangles; the meshes here are small and
/// the graph is built exactly once.
pub(crate) fn build_links(figure: &Figure) -> Vec<LinkedTri> {
    let count = figure.poly_count();
    let mut tris: Vec<LinkedTri> = (0..count)
        .map(|i| LinkedTri {
            indices: figure.triangle_indices(i),
            centroid: figure.triangle_centroid(i),
            links: Vec::new(),
        })
        .collect();

    for i in 0..count {
        let mut links = Vec::new();
        for j in 0..count {
            if j == i {
                continue;
            }
            if shares_edge(&tris[i], &tris[j]) {
                links.push(TriId(j));
                // A triangle has three edges, so three neighbors at most.
                if links.len() == 3 {
                    break;
                }
            }
        }
        tris[i].links = links;
    }
    tris
}

/// Exactly two shared vertex indices means a shared edge.
fn shares_edge(a: &LinkedTri, b: &LinkedTri) -> bool {
    let mut shared = 0;
    for &ia in &a.indices {
        if b.indices.contains(&ia) {
            shared += 1;
        }
    }
    shared == 2
}
