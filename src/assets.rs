use crate::layout;
use crate::model::{self, DecodedImage, ExternalData, ModelAsset};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Results of async loads, drained by the frame loop.
#[derive(Default)]
pub struct AssetInbox {
    pub model: Option<ModelAsset>,
    pub textures: Vec<(String, Option<DecodedImage>)>,
}

pub type SharedInbox = Rc<RefCell<AssetInbox>>;

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let body = resp
        .array_buffer()
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let buf = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn fetch_external(base: &str, uri: Option<String>) -> Option<Vec<u8>> {
    let uri = uri?;
    if uri.starts_with("data:") {
        log::warn!("[assets] embedded data URI in {} not supported", base);
        return None;
    }
    let url = layout::resolve_uri(base, &uri);
    match fetch_bytes(&url).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!("[assets] {:#}", e);
            None
        }
    }
}

/// Fetch a glTF (or GLB) and everything it references, then flatten it.
pub async fn load_model(url: &str) -> anyhow::Result<ModelAsset> {
    let bytes = fetch_bytes(url).await?;
    let gltf = model::parse(&bytes)?;
    let mut external = ExternalData::default();
    for uri in model::buffer_uris(&gltf.document) {
        external.buffers.push(fetch_external(url, uri).await);
    }
    for uri in model::image_uris(&gltf.document) {
        external.images.push(fetch_external(url, uri).await);
    }
    model::flatten(&gltf, &external)
}

pub async fn load_texture(path: &str) -> anyhow::Result<DecodedImage> {
    let bytes = fetch_bytes(path).await?;
    model::decode_image(&bytes)
}

pub fn spawn_model_load(url: &'static str, inbox: SharedInbox) {
    spawn_local(async move {
        match load_model(url).await {
            Ok(asset) => {
                log::info!(
                    "[assets] model {} ready: {} primitives, {} vertices",
                    url,
                    asset.primitives.len(),
                    asset.vertex_count()
                );
                inbox.borrow_mut().model = Some(asset);
            }
            Err(e) => log::warn!("[assets] model {} unavailable: {:#}", url, e),
        }
    });
}

/// Failed textures are still delivered (as `None`) so the renderer can fall back.
pub fn spawn_texture_load(path: String, inbox: SharedInbox) {
    spawn_local(async move {
        let image = match load_texture(&path).await {
            Ok(img) => Some(img),
            Err(e) => {
                log::warn!("[assets] texture {}: {:#}", path, e);
                None
            }
        };
        inbox.borrow_mut().textures.push((path, image));
    });
}
