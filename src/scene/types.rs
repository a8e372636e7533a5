/// `<meta name=...>` every scene document carries, a loaded page without it is a miss
pub const SCENE_MARKER: &str = "logistics-scene";

pub const DEFAULT_FALLBACK: &[&str] = &["🌐", "🏭", "🚛", "📦", "🛣️"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneAsset {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub scene_url: Option<&'static str>,
    pub fallback: &'static [&'static str],
}

static SCENE_ASSETS: [SceneAsset; 3] = [
    SceneAsset {
        id: "global-network",
        title: "Global Logistics Network",
        description: "Hubs, routes and carriers moving goods around the world",
        scene_url: None,
        fallback: DEFAULT_FALLBACK,
    },
    SceneAsset {
        id: "smart-warehouse",
        title: "Smart Warehouse",
        description: "Automated storage and picking inside a distribution center",
        scene_url: Some("/3d/smart-warehouse/index.html"),
        fallback: &["🏬", "🤖", "📦", "🏷️"],
    },
    SceneAsset {
        id: "package-box",
        title: "Your Package",
        description: "A closer look at the parcel on its way to you",
        scene_url: Some("/3d/box-package/index.html"),
        fallback: &["📦", "🎁", "🚚"],
    },
];

pub fn scene_asset(id: &str) -> Option<&'static SceneAsset> {
    SCENE_ASSETS.iter().find(|asset| asset.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneSource {
    Scene(&'static str),
    Fallback(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SceneState {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl SceneState {
    /// State after the frame reported `load`, a page without the scene marker failed
    pub fn on_load(self, has_marker: bool) -> Self {
        match self {
            Self::Loading | Self::Ready if has_marker => Self::Ready,
            Self::Loading | Self::Ready | Self::Failed => Self::Failed,
        }
    }

    /// State once the load deadline passed
    pub fn on_timeout(self) -> Self {
        match self {
            Self::Loading => Self::Failed,
            Self::Ready | Self::Failed => self,
        }
    }
}

/// What to show for an asset in a given load state, failures are never retried
pub fn resolve_scene(asset: Option<&'static SceneAsset>, state: SceneState) -> SceneSource {
    let fallback = asset.map_or(DEFAULT_FALLBACK, |asset| asset.fallback);

    match (asset.and_then(|asset| asset.scene_url), state) {
        (Some(url), SceneState::Loading | SceneState::Ready) => SceneSource::Scene(url),
        (Some(_), SceneState::Failed) | (None, _) => SceneSource::Fallback(fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_scene, scene_asset, SceneSource, SceneState, DEFAULT_FALLBACK};

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            scene_asset("smart-warehouse").map(|asset| asset.title),
            Some("Smart Warehouse")
        );
        assert!(scene_asset("missing").is_none());
    }

    #[test]
    fn configured_scene_is_shown() {
        let asset = scene_asset("package-box");

        assert_eq!(
            resolve_scene(asset, SceneState::Loading),
            SceneSource::Scene("/3d/box-package/index.html")
        );
        assert_eq!(
            resolve_scene(asset, SceneState::Ready),
            SceneSource::Scene("/3d/box-package/index.html")
        );
    }

    #[test]
    fn failed_scene_falls_back_to_its_icons() {
        let asset = scene_asset("package-box");

        assert_eq!(
            resolve_scene(asset, SceneState::Failed),
            SceneSource::Fallback(&["📦", "🎁", "🚚"])
        );
    }

    #[test]
    fn asset_without_scene_uses_fallback() {
        assert_eq!(
            resolve_scene(scene_asset("global-network"), SceneState::Loading),
            SceneSource::Fallback(DEFAULT_FALLBACK)
        );
    }

    #[test]
    fn unknown_asset_uses_default_fallback() {
        assert_eq!(
            resolve_scene(None, SceneState::Ready),
            SceneSource::Fallback(DEFAULT_FALLBACK)
        );
    }

    #[test]
    fn loaded_page_without_marker_fails() {
        assert_eq!(SceneState::Loading.on_load(true), SceneState::Ready);
        assert_eq!(SceneState::Loading.on_load(false), SceneState::Failed);
        assert_eq!(SceneState::Failed.on_load(true), SceneState::Failed);

        let asset = scene_asset("smart-warehouse");
        assert_eq!(
            resolve_scene(asset, SceneState::Loading.on_load(false)),
            SceneSource::Fallback(&["🏬", "🤖", "📦", "🏷️"])
        );
    }

    #[test]
    fn scene_still_loading_at_the_deadline_fails() {
        assert_eq!(SceneState::Loading.on_timeout(), SceneState::Failed);
        assert_eq!(SceneState::Ready.on_timeout(), SceneState::Ready);
    }
}
