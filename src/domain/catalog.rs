use crate::cli::GeneratorKind;
use crate::domain::models::{AssetSize, AssetSpec, ModeEntry};

/// Mode list shorthand for "every installed mode".
pub const ALL_MODES: &str = "all";

const FAVICON_SIZES: &[u32] = &[128, 96, 32, 16];
const PWA_ICON_SIZES: &[u32] = &[128, 192, 256, 384, 512];
const APPLE_ICON_SIZES: &[u32] = &[120, 152, 167, 180];
const APPLE_LAUNCH_SIZES: &[(u32, u32)] = &[
    (828, 1792),
    (1125, 2436),
    (1242, 2688),
    (750, 1334),
    (1242, 2208),
    (640, 1136),
    (1536, 2048),
    (1668, 2224),
    (1668, 2388),
    (2048, 2732),
];
const BEX_ICON_SIZES: &[u32] = &[16, 48, 128];
const CORDOVA_ANDROID_ICON_SIZES: &[u32] = &[36, 48, 72, 96, 144, 192];
const CORDOVA_ANDROID_SPLASH_SIZES: &[(u32, u32)] = &[
    (320, 200),
    (480, 320),
    (800, 480),
    (1280, 720),
    (1600, 960),
    (1920, 1280),
    (200, 320),
    (320, 480),
    (480, 800),
    (720, 1280),
    (960, 1600),
    (1280, 1920),
];
const CORDOVA_IOS_ICON_SIZES: &[u32] = &[
    20, 29, 40, 50, 57, 58, 60, 72, 76, 80, 87, 100, 114, 120, 144, 152, 167, 180, 1024,
];
const CAPACITOR_IOS_ICON_SIZES: &[u32] = &[20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024];
const ANDROID_DENSITIES: &[(&str, u32)] = &[
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

fn png(folder: &str, name: &str, sizes: &[u32]) -> AssetSpec {
    AssetSpec {
        generator: GeneratorKind::Png,
        name: name.to_string(),
        folder: folder.to_string(),
        sizes: sizes.iter().copied().map(AssetSize::Square).collect(),
        platform: None,
    }
}

fn splash(folder: &str, name: &str, sizes: &[(u32, u32)]) -> AssetSpec {
    AssetSpec {
        generator: GeneratorKind::Splashscreen,
        name: name.to_string(),
        folder: folder.to_string(),
        sizes: sizes.iter().map(|&(w, h)| AssetSize::Rect([w, h])).collect(),
        platform: None,
    }
}

fn single(generator: GeneratorKind, folder: &str, name: &str) -> AssetSpec {
    AssetSpec {
        generator,
        name: name.to_string(),
        folder: folder.to_string(),
        sizes: Vec::new(),
        platform: None,
    }
}

fn on(platform: &str, mut spec: AssetSpec) -> AssetSpec {
    spec.platform = Some(platform.to_string());
    spec
}

fn mode(name: &str, folder: &str, assets: Vec<AssetSpec>) -> ModeEntry {
    ModeEntry {
        name: name.to_string(),
        folder: folder.to_string(),
        assets,
    }
}

fn favicon_assets() -> Vec<AssetSpec> {
    vec![
        single(GeneratorKind::Ico, "public", "favicon.ico"),
        png("public/icons", "favicon-{size}x{size}.png", FAVICON_SIZES),
    ]
}

fn pwa_assets() -> Vec<AssetSpec> {
    let mut assets = favicon_assets();
    assets.extend([
        png("public/icons", "icon-{size}x{size}.png", PWA_ICON_SIZES),
        png("public/icons", "apple-icon-{size}x{size}.png", APPLE_ICON_SIZES),
        png("public/icons", "ms-icon-{size}x{size}.png", &[144]),
        single(GeneratorKind::Svg, "public/icons", "safari-pinned-tab.svg"),
        splash(
            "public/icons",
            "apple-launch-{width}x{height}.png",
            APPLE_LAUNCH_SIZES,
        ),
    ]);
    assets
}

fn cordova_assets() -> Vec<AssetSpec> {
    vec![
        on(
            "cordova-android",
            png(
                "src-cordova/res/android",
                "icon-{size}x{size}.png",
                CORDOVA_ANDROID_ICON_SIZES,
            ),
        ),
        on(
            "cordova-android",
            splash(
                "src-cordova/res/screen/android",
                "splash-{width}x{height}.png",
                CORDOVA_ANDROID_SPLASH_SIZES,
            ),
        ),
        on(
            "cordova-ios",
            png(
                "src-cordova/res/ios",
                "icon-{size}x{size}.png",
                CORDOVA_IOS_ICON_SIZES,
            ),
        ),
        on(
            "cordova-ios",
            splash(
                "src-cordova/res/screen/ios",
                "Default@2x~universal~anyany.png",
                &[(2732, 2732)],
            ),
        ),
    ]
}

fn capacitor_assets() -> Vec<AssetSpec> {
    let mut assets = vec![png(
        "src-capacitor/ios/App/App/Assets.xcassets/AppIcon.appiconset",
        "AppIcon-{size}x{size}.png",
        CAPACITOR_IOS_ICON_SIZES,
    )];
    for &(density, edge) in ANDROID_DENSITIES {
        let folder = format!("src-capacitor/android/app/src/main/res/mipmap-{}", density);
        assets.push(png(&folder, "ic_launcher.png", &[edge]));
        assets.push(png(&folder, "ic_launcher_round.png", &[edge]));
        assets.push(png(&folder, "ic_launcher_foreground.png", &[edge * 9 / 4]));
    }
    assets.push(splash(
        "src-capacitor/ios/App/App/Assets.xcassets/Splash.imageset",
        "splash-{width}x{height}.png",
        &[(2732, 2732)],
    ));
    assets.push(splash(
        "src-capacitor/android/app/src/main/res/drawable",
        "splash.png",
        &[(480, 320)],
    ));
    assets
}

fn electron_assets() -> Vec<AssetSpec> {
    vec![
        single(GeneratorKind::Icns, "src-electron/icons", "icon.icns"),
        single(GeneratorKind::Ico, "src-electron/icons", "icon.ico"),
        png("src-electron/icons", "icon.png", &[512]),
        png("src-electron/icons", "linux-{size}x{size}.png", &[512]),
    ]
}

/// Ordered registry of modes. Lookups are by name; iteration keeps catalog order.
#[derive(Debug, Clone)]
pub struct ModeCatalog {
    modes: Vec<ModeEntry>,
}

impl ModeCatalog {
    pub fn new(modes: Vec<ModeEntry>) -> Self {
        let mut catalog = Self { modes: Vec::new() };
        for m in modes {
            catalog.insert(m);
        }
        catalog
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            mode("spa", "src", favicon_assets()),
            mode("pwa", "src-pwa", pwa_assets()),
            mode("ssr", "src-ssr", favicon_assets()),
            mode(
                "bex",
                "src-bex",
                vec![on(
                    "bex",
                    png("src-bex/icons", "icon-{size}x{size}.png", BEX_ICON_SIZES),
                )],
            ),
            mode("cordova", "src-cordova", cordova_assets()),
            mode("capacitor", "src-capacitor", capacitor_assets()),
            mode("electron", "src-electron", electron_assets()),
        ])
    }

    /// Replaces a same-named mode in place, or appends.
    pub fn insert(&mut self, entry: ModeEntry) {
        match self.modes.iter_mut().find(|m| m.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.modes.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ModeEntry> {
        self.modes.iter().find(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeEntry> {
        self.modes.iter()
    }
}
