//! Bone extraction: decompose the triangle adjacency graph into maximal
//! chains.
//!
//! Per-branch state machine driven by a work queue. Each task walks one
//! chain: advance while exactly one unvisited neighbor remains; close the
//! chain when none remains; on two or more, close it at the junction and
//! spawn one new task (and bone id) per open direction. Every triangle is
//! claimed by exactly one walk step, so the queue drains after visiting
//! each triangle once.

use std::collections::VecDeque;

use log::debug;

use super::types::{Bone, BoneId, BoneKind, LinkedTri, TriId};

struct ChainTask {
    /// Triangle the chain starts from (a junction for spawned tasks).
    tri: usize,
    /// First triangle to step into; `None` only for a lone seed triangle.
    into: Option<usize>,
    bone: BoneId,
}

/// Decompose the adjacency graph into bones, wiring bone adjacency at each
/// junction (the closed bone and all bones spawned there form a clique).
pub(crate) fn extract_bones(tris: &[LinkedTri]) -> Vec<Bone> {
    let mut bones: Vec<Bone> = Vec::new();
    if tris.is_empty() {
        return bones;
    }
    let mut visited = vec![false; tris.len()];
    let mut queue: VecDeque<ChainTask> = VecDeque::new();

    // Seed at an extremity. The adjacency graph of a triangulated simple
    // polygon is a tree, so a degree ≤ 1 triangle always exists.
    let seed = tris.iter().position(|t| t.links.len() <= 1).unwrap_or(0);
    bones.push(Bone::new());
    queue.push_back(ChainTask {
        tri: seed,
        into: tris[seed].links.first().map(|t| t.0),
        bone: BoneId(0),
    });

    while let Some(task) = queue.pop_front() {
        let mut chain = vec![TriId(task.tri)];
        visited[task.tri] = true;

        let mut cur = match task.into {
            Some(t) if !visited[t] => t,
            _ => {
                // Lone triangle, or a direction already consumed (only
                // possible on malformed, cyclic adjacency).
                close_chain(&mut bones, task.bone, chain, tris);
                continue;
            }
        };

        loop {
            chain.push(TriId(cur));
            visited[cur] = true;
            let open: Vec<usize> = tris[cur]
                .links
                .iter()
                .map(|t| t.0)
                .filter(|&t| !visited[t])
                .collect();
            match open.len() {
                0 => {
                    close_chain(&mut bones, task.bone, chain, tris);
                    break;
                }
                1 => {
                    cur = open[0];
                }
                _ => {
                    close_chain(&mut bones, task.bone, chain, tris);
                    let spawned: Vec<BoneId> = open
                        .iter()
                        .map(|&next| {
                            let id = BoneId(bones.len());
                            bones.push(Bone::new());
                            queue.push_back(ChainTask {
                                tri: cur,
                                into: Some(next),
                                bone: id,
                            });
                            id
                        })
                        .collect();
                    debug!(
                        "junction at triangle {} spawns {} bones",
                        cur,
                        spawned.len()
                    );
                    // Junction clique: closed bone and every spawned bone
                    // are mutually adjacent.
                    for &s in &spawned {
                        bones[task.bone.0].neighbors.push(s);
                        bones[s.0].neighbors.push(task.bone);
                    }
                    for (i, &a) in spawned.iter().enumerate() {
                        for (j, &b) in spawned.iter().enumerate() {
                            if i != j {
                                bones[a.0].neighbors.push(b);
                            }
                        }
                    }
                    break;
                }
            }
        }
    }
    bones
}

fn close_chain(bones: &mut [Bone], id: BoneId, chain: Vec<TriId>, tris: &[LinkedTri]) {
    let head_degree = tris[chain[0].0].links.len();
    let tail_degree = tris[chain[chain.len() - 1].0].links.len();
    let kind = if head_degree <= 1 || tail_degree <= 1 {
        BoneKind::End
    } else {
        BoneKind::Relay
    };
    debug!(
        "closed bone {} ({:?}) with {} triangles",
        id.0,
        kind,
        chain.len()
    );
    let bone = &mut bones[id.0];
    bone.tris = chain;
    bone.kind = kind;
}
