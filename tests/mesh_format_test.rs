use stow_ngin::resources::{self, MeshError, stl};

mod common;
use common::test_utils::{binary_stl, path_str, spanning_triangles, write_temp_file};

#[test]
fn parses_binary_stl() {
    let data = binary_stl(&spanning_triangles());
    let geometry = stl::parse(&data).unwrap();

    assert_eq!(geometry.vertices.len(), 6);
    assert_eq!(geometry.indices.len(), 6);
    assert_eq!(geometry.triangle_count(), 2);
    // facet normal repeated per vertex for flat shading
    assert!(geometry.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));

    let aabb = geometry.aabb();
    assert_eq!(aabb.min.x, -2.0);
    assert_eq!(aabb.max.x, 2.0);
    assert_eq!(aabb.min.y, -1.0);
    assert_eq!(aabb.max.z, 0.5);
}

#[test]
fn parses_ascii_stl() {
    let text = "\
solid box
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 4 0 0
      vertex 0 2 0
    endloop
  endfacet
endsolid box
";
    let geometry = stl::parse(text.as_bytes()).unwrap();
    assert_eq!(geometry.vertices.len(), 3);
    assert_eq!(geometry.vertices[1].position, [4.0, 0.0, 0.0]);
    assert!(geometry.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
}

#[test]
fn binary_stl_with_a_solid_header_is_still_binary() {
    // some exporters write "solid" into the binary header
    let mut data = binary_stl(&spanning_triangles());
    data[..6].copy_from_slice(b"solid ");
    let geometry = stl::parse(&data).unwrap();
    assert_eq!(geometry.triangle_count(), 2);
}

#[test]
fn truncated_binary_stl_is_rejected() {
    let mut data = binary_stl(&spanning_triangles());
    data.truncate(data.len() - 10);
    match stl::parse(&data) {
        Err(MeshError::Truncated { expected, actual }) => {
            assert_eq!(expected, 84 + 2 * 50);
            assert_eq!(actual, expected - 10);
        }
        other => panic!("expected truncation error, got {other:?}"),
    }

    assert!(matches!(
        stl::parse(b"abc"),
        Err(MeshError::Truncated { .. })
    ));
}

#[test]
fn ascii_stl_with_a_dangling_vertex_is_rejected() {
    let text = "solid bad\nfacet normal 0 0 1\nvertex 0 0 0\nvertex 1 0 0\nendfacet\nendsolid";
    assert!(matches!(
        stl::parse(text.as_bytes()),
        Err(MeshError::Malformed(_))
    ));
}

#[tokio::test]
async fn load_geometry_rejects_unknown_extensions() {
    match resources::load_geometry("models/base_model.gltf").await {
        Err(MeshError::UnsupportedFormat(path)) => assert_eq!(path, "models/base_model.gltf"),
        other => panic!("expected unsupported format, got {other:?}"),
    }
}

#[tokio::test]
async fn load_geometry_reports_missing_files() {
    let path = std::env::temp_dir().join("stow-ngin-test-does-not-exist.stl");
    let result = resources::load_geometry(path.to_str().unwrap()).await;
    assert!(matches!(result, Err(MeshError::Io { .. })));
}

#[tokio::test]
async fn load_geometry_reads_stl_from_disk() {
    let path = write_temp_file("disk.stl", &binary_stl(&spanning_triangles()));
    let geometry = resources::load_geometry(path_str(&path)).await.unwrap();
    assert_eq!(geometry.triangle_count(), 2);
}

#[tokio::test]
async fn load_geometry_reads_obj_from_disk() {
    let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";
    let path = write_temp_file("tri.obj", obj.as_bytes());
    let geometry = resources::load_geometry(path_str(&path)).await.unwrap();
    assert_eq!(geometry.vertices.len(), 3);
    assert_eq!(geometry.indices, vec![0, 1, 2]);
    assert_eq!(geometry.vertices[0].normal, [0.0, 0.0, 1.0]);
}
