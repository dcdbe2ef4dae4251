/**
 * This module contains all logic for loading mesh geometry from external files.
 */
use std::path::Path;

use thiserror::Error;

use crate::data_structures::geometry::Geometry;

pub mod obj;
pub mod stl;

/// Why a mesh resource could not be turned into geometry.
///
/// None of these are fatal: a failed load leaves the requesting instance
/// without geometry and touches nothing else.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("could not read mesh resource {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(target_arch = "wasm32")]
    #[error("could not fetch mesh resource {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("truncated mesh file: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("malformed mesh data: {0}")]
    Malformed(String),
    #[error("unsupported mesh format: {0}")]
    UnsupportedFormat(String),
}

/// Load and parse the mesh resource behind a path string.
///
/// The format is picked by file extension; the grammar of each format is the
/// concern of its submodule. Loads for different instances run independently
/// and may complete in any relative order.
pub async fn load_geometry(mesh_path: &str) -> Result<Geometry, MeshError> {
    let extension = Path::new(mesh_path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("stl") => {
            let data = load_binary(mesh_path).await?;
            stl::parse(&data)
        }
        Some("obj") => obj::load(mesh_path).await,
        _ => Err(MeshError::UnsupportedFormat(mesh_path.to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_path(file_name: &str) -> std::path::PathBuf {
    let path = Path::new(file_name);
    // Absolute paths pass through so embedders can point anywhere.
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new("assets").join(path)
    }
}

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> reqwest::Url {
    use wasm_bindgen::UnwrapThrowExt;

    let window = web_sys::window().unwrap_throw();
    let location = window.location();
    let origin = location.origin().unwrap_throw();
    let base = reqwest::Url::parse(&format!("{}/assets/", origin)).unwrap_throw();
    base.join(file_name).unwrap_throw()
}

pub async fn load_string(file_name: &str) -> Result<String, MeshError> {
    #[cfg(target_arch = "wasm32")]
    let txt = {
        let url = format_url(file_name);
        let response = reqwest::get(url).await.map_err(|source| MeshError::Fetch {
            path: file_name.to_string(),
            source,
        })?;
        response.text().await.map_err(|source| MeshError::Fetch {
            path: file_name.to_string(),
            source,
        })?
    };
    #[cfg(not(target_arch = "wasm32"))]
    let txt = tokio::fs::read_to_string(resolve_path(file_name))
        .await
        .map_err(|source| MeshError::Io {
            path: file_name.to_string(),
            source,
        })?;

    Ok(txt)
}

pub async fn load_binary(file_name: &str) -> Result<Vec<u8>, MeshError> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name);
        let response = reqwest::get(url).await.map_err(|source| MeshError::Fetch {
            path: file_name.to_string(),
            source,
        })?;
        response
            .bytes()
            .await
            .map_err(|source| MeshError::Fetch {
                path: file_name.to_string(),
                source,
            })?
            .to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = tokio::fs::read(resolve_path(file_name))
        .await
        .map_err(|source| MeshError::Io {
            path: file_name.to_string(),
            source,
        })?;

    Ok(data)
}
