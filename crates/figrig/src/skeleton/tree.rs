//! Bone tree rooting and per-vertex blend weights.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geom::Point2;

use super::types::{Bone, BoneId, BoneNode, BoneWeight, LinkedTri};

/// Root the bone-adjacency graph at the longest bone and expand
/// breadth-first into a flat node list (node 0 = root, children after
/// parents).
///
/// A neighbor is not attached under a node when it is the node's own parent
/// or a neighbor of that parent: at a junction the closed bone and all
/// bones spawned there form a clique, so the parent-side neighbors are
/// exactly the siblings already attached under the same parent. This keeps
/// 3-plus-way junctions from producing duplicate or cyclic edges.
pub(crate) fn build_nodes(bones: &[Bone], tris: &[LinkedTri]) -> Vec<BoneNode> {
    let mut nodes: Vec<BoneNode> = Vec::new();
    if bones.is_empty() {
        return nodes;
    }
    let root = longest_bone(bones, tris);
    debug!("rooting bone tree at bone {}", root.0);
    nodes.push(BoneNode {
        bone: root,
        parent: None,
        children: Vec::new(),
    });

    let mut head = 0;
    while head < nodes.len() {
        let ni = head;
        head += 1;
        let bone = nodes[ni].bone;
        let parent_bone = nodes[ni].parent.map(|p| nodes[p].bone);
        for &nb in &bones[bone.0].neighbors {
            if let Some(pb) = parent_bone {
                if nb == pb || bones[pb.0].neighbors.contains(&nb) {
                    trace!("bone {} stays off bone {}: parent-side neighbor", nb.0, bone.0);
                    continue;
                }
            }
            let child = nodes.len();
            nodes.push(BoneNode {
                bone: nb,
                parent: Some(ni),
                children: Vec::new(),
            });
            nodes[ni].children.push(child);
        }
    }
    nodes
}

fn longest_bone(bones: &[Bone], tris: &[LinkedTri]) -> BoneId {
    let mut best = 0.0;
    let mut at = 0;
    for (i, bone) in bones.iter().enumerate() {
        let head: Point2 = tris[bone.tris[0].0].centroid;
        let tail: Point2 = tris[bone.tris[bone.tris.len() - 1].0].centroid;
        let len = (tail - head).norm();
        if len > best {
            best = len;
            at = i;
        }
    }
    BoneId(at)
}

/// Record each bone's tree index against the vertices of its triangles,
/// deduplicate per vertex in discovery order, and convert to blend weights.
pub(crate) fn vertex_weights(
    nodes: &[BoneNode],
    bones: &[Bone],
    tris: &[LinkedTri],
    vertex_count: usize,
) -> Result<Vec<BoneWeight>> {
    let mut influences: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];
    for (tree_idx, node) in nodes.iter().enumerate() {
        for t in &bones[node.bone.0].tris {
            for &vi in &tris[t.0].indices {
                influences[vi].push(tree_idx);
            }
        }
    }
    influences
        .into_iter()
        .enumerate()
        .map(|(vertex, list)| to_weight(vertex, &list))
        .collect()
}

/// Weight table by influence count. The 3-influence row sums to 0.99, as
/// shipped; downstream skinning tolerates it and renormalizing would change
/// poses that were authored against it.
fn to_weight(vertex: usize, recorded: &[usize]) -> Result<BoneWeight> {
    let mut seen: Vec<usize> = Vec::with_capacity(4.min(recorded.len()));
    for &b in recorded {
        if !seen.contains(&b) {
            seen.push(b);
        }
    }
    let row: &[f32] = match seen.len() {
        0 => return Err(Error::DegenerateGraph { vertex }),
        1 => &[1.0],
        2 => &[0.5, 0.5],
        3 => &[0.33, 0.33, 0.33],
        // Four and above: keep the first four discovered, drop the rest.
        _ => &[0.25, 0.25, 0.25, 0.25],
    };
    let mut out = BoneWeight {
        count: row.len(),
        bones: [0; 4],
        weights: [0.0; 4],
    };
    for (slot, (&b, &w)) in seen.iter().zip(row.iter()).enumerate() {
        out.bones[slot] = b;
        out.weights[slot] = w;
    }
    Ok(out)
}
