//! Headless walkthrough of the session API: place two storage units,
//! select one and nudge it around with the keyboard protocol.
//!
//! Writes its own tiny STL to a temp file so it runs without any assets.

use stow_ngin::{KeyCode, input::Selection, session::Visualizer, units::DisplayUnit};

fn push_vec3(buf: &mut Vec<u8>, v: [f32; 3]) {
    for c in v {
        buf.extend_from_slice(&c.to_le_bytes());
    }
}

/// Binary STL: two triangles spanning a 4 x 2 x 1 meter box.
fn demo_stl_bytes() -> Vec<u8> {
    let triangles = [
        [
            [0.0, 1.0, 0.0],
            [-2.0, -1.0, -0.5],
            [2.0, -1.0, -0.5],
            [0.0, 1.0, 0.5],
        ],
        [
            [0.0, 1.0, 0.0],
            [-2.0, -1.0, 0.5],
            [2.0, 1.0, 0.5],
            [0.0, -1.0, -0.5],
        ],
    ];
    let mut buf = vec![0u8; 80];
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        for v in tri {
            push_vec3(&mut buf, v);
        }
        buf.extend_from_slice(&[0, 0]);
    }
    buf
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stow_ngin::init_logging();

    let path = std::env::temp_dir().join("stow-ngin-demo.stl");
    std::fs::write(&path, demo_stl_bytes())?;

    let mut viz = Visualizer::new();
    // Normally the catalogue forwards this when the user picks a design.
    viz.set_default_mesh_path(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("temp path is not valid utf-8"))?,
    );

    let first = viz.add(None);
    let second = viz.add(None);
    println!("placed instances {first} and {second}, loading meshes...");
    viz.process_loads().await;

    viz.select(first);
    assert_eq!(viz.selection(), Selection::Active(first));
    if viz.movement_hint_visible() {
        println!("Use arrow keys to move models");
    }

    viz.handle_key(KeyCode::ArrowUp);
    viz.handle_key(KeyCode::ArrowRight);

    viz.set_unit(DisplayUnit::Centimeter);
    for inst in viz.instances() {
        println!(
            "#{} at ({:.2}, {:.2}, {:.2}) scale {} {} loaded: {}",
            inst.id,
            inst.position.x,
            inst.position.y,
            inst.position.z,
            viz.scale_field(inst.id, 0).unwrap_or_default(),
            viz.unit().suffix(),
            inst.geometry.is_some(),
        );
    }
    Ok(())
}
