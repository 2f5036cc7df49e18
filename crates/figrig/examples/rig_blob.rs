//! Run the full pipeline on a random freehand-style blob and print a rig
//! summary, for quick visual sanity on bone counts and tree shape.
//!
//! Usage:
//!   cargo run -p figrig --example rig_blob -- [seed] [vertex_count]

use figrig::prelude::*;

fn main() -> Result<()> {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2026);
    let n: usize = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(24);

    let cfg = ContourCfg {
        vertex_count: n,
        ..ContourCfg::default()
    };
    let raw = draw_contour_radial(cfg, ReplayToken { seed, index: 0 });
    let contour = simplify(&raw, n * 3 / 4);
    println!("contour: {} raw points, {} after simplify", raw.len(), contour.len());

    let figure = Figure::from_contour(&contour, Color::WHITE)?;
    println!(
        "mesh: {} vertices, {} triangles",
        figure.vertices().len(),
        figure.poly_count()
    );

    let rig = Rig::from_figure(figure)?;
    let skeleton = rig.skeleton();
    println!("skeleton: {} bones, root = bone {}", skeleton.bones().len(), rig.root().0);
    for (i, node) in rig.nodes().iter().enumerate() {
        let bone = &skeleton.bones()[node.bone.0];
        println!(
            "  node {i}: bone {} ({:?}), {} triangles, length {:.3}, children {:?}",
            node.bone.0,
            bone.kind,
            bone.tris.len(),
            skeleton.bone_length(node.bone),
            node.children
        );
    }
    for (bone, points) in rig.end_markers() {
        println!("  end markers on bone {}: {} point(s)", bone.0, points.len());
    }
    Ok(())
}
