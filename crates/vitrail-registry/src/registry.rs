// SPDX-FileCopyrightText: 2026 Vitrail Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The central provider registry.
//!
//! One entry list per capability category, in priority order: the first
//! entry that constructs successfully wins. Which list variant is
//! registered depends on the platform, decided once at startup. After
//! construction the registry is read-only; accessors return copies so a
//! caller can never mutate the table behind the toolkit's back.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

use vitrail_core::error::RegistryError;
use vitrail_core::types::{Category, Platform};

use crate::entry::ProviderEntry;

const E: fn(&'static str, &'static str) -> ProviderEntry = ProviderEntry::new;

/// Immutable per-platform provider table.
#[derive(Debug)]
pub struct Registry {
    platform: Platform,
    table: BTreeMap<Category, Vec<ProviderEntry>>,
}

impl Registry {
    /// Build and validate the registry for the given platform.
    ///
    /// Enforces the well-formedness invariants at construction time:
    /// every category has at least one entry, names are lowercase and
    /// non-empty, module identifiers carry the category prefix, and
    /// neither names nor module identifiers repeat within a category.
    pub fn for_platform(platform: Platform) -> Result<Registry, RegistryError> {
        let mut table = BTreeMap::new();
        for category in Category::ALL {
            let entries = default_entries(category, platform);
            validate_entries(category, &entries)?;
            table.insert(category, entries);
        }
        Ok(Registry { platform, table })
    }

    /// The platform this registry was built for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// All known categories, in stable order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Provider short names for a category, in priority order.
    pub fn providers(&self, category: Category) -> Vec<&'static str> {
        self.entries(category).iter().map(|e| e.name).collect()
    }

    /// The raw entries for a category, in priority order.
    pub fn entries(&self, category: Category) -> &[ProviderEntry] {
        // Every category is inserted in `for_platform`, so the lookup
        // cannot miss for a typed key.
        self.table.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// An independent name -> module-identifier copy for a category.
    ///
    /// Mutating the returned map never affects the registry.
    pub fn module_map(&self, category: Category) -> BTreeMap<String, String> {
        self.entries(category)
            .iter()
            .map(|e| (e.name.to_string(), e.module_id.to_string()))
            .collect()
    }

    /// Resolve a string category key, as received from CLI arguments or
    /// configuration. Unknown keys are a caller bug and fail loudly.
    pub fn category_by_key(&self, key: &str) -> Result<Category, RegistryError> {
        Category::from_str(key).map_err(|_| RegistryError::UnknownCategory {
            key: key.to_string(),
        })
    }

    /// `providers` keyed by string, failing with `UnknownCategory`.
    pub fn providers_by_key(&self, key: &str) -> Result<Vec<&'static str>, RegistryError> {
        Ok(self.providers(self.category_by_key(key)?))
    }

    /// `module_map` keyed by string, failing with `UnknownCategory`.
    pub fn module_map_by_key(
        &self,
        key: &str,
    ) -> Result<BTreeMap<String, String>, RegistryError> {
        Ok(self.module_map(self.category_by_key(key)?))
    }
}

fn validate_entries(
    category: Category,
    entries: &[ProviderEntry],
) -> Result<(), RegistryError> {
    if entries.is_empty() {
        return Err(RegistryError::EmptyCategory { category });
    }

    let prefix = category.module_prefix();
    let mut names = HashSet::new();
    let mut modules = HashSet::new();

    for entry in entries {
        if entry.name.is_empty() {
            return Err(RegistryError::InvalidEntry {
                category,
                name: entry.module_id.to_string(),
                reason: "empty provider name".to_string(),
            });
        }
        if entry.name != entry.name.to_lowercase() {
            return Err(RegistryError::InvalidEntry {
                category,
                name: entry.name.to_string(),
                reason: "provider name must be lowercase".to_string(),
            });
        }
        if !entry.module_id.starts_with(prefix) || entry.module_id.len() == prefix.len() {
            return Err(RegistryError::InvalidEntry {
                category,
                name: entry.name.to_string(),
                reason: format!(
                    "module id `{}` must start with `{prefix}`",
                    entry.module_id
                ),
            });
        }
        if !names.insert(entry.name) {
            return Err(RegistryError::DuplicateName {
                category,
                name: entry.name.to_string(),
            });
        }
        if !modules.insert(entry.module_id) {
            return Err(RegistryError::DuplicateModule {
                category,
                module_id: entry.module_id.to_string(),
            });
        }
    }

    Ok(())
}

/// The static candidate lists, one variant per platform.
///
/// Ordering is priority order. Where a no-op fallback exists (clipboard)
/// it is listed last, matching its role of catching everything.
fn default_entries(category: Category, platform: Platform) -> Vec<ProviderEntry> {
    use Platform::{Android, Linux, MacOs, Windows};

    match category {
        Category::Window => match platform {
            Linux => vec![E("sdl", "window_sdl"), E("x11", "window_x11")],
            Android => vec![E("sdl", "window_sdl"), E("egl", "window_egl")],
            _ => vec![E("sdl", "window_sdl")],
        },
        Category::Clipboard => match platform {
            Windows => vec![
                E("powershell", "clipboard_powershell"),
                E("dummy", "clipboard_dummy"),
            ],
            Linux => vec![
                E("xclip", "clipboard_xclip"),
                E("xsel", "clipboard_xsel"),
                E("dummy", "clipboard_dummy"),
            ],
            MacOs => vec![
                E("pbcopy", "clipboard_pbcopy"),
                E("dummy", "clipboard_dummy"),
            ],
            // Android clipboard access goes through the platform bridge,
            // which is outside this subsystem; only the no-op is listed.
            _ => vec![E("dummy", "clipboard_dummy")],
        },
        Category::Input => match platform {
            Windows => vec![
                E("wm_touch", "input_wm_touch"),
                E("wm_pen", "input_wm_pen"),
                E("mouse", "input_mouse"),
                E("tuio", "input_tuio"),
            ],
            Linux => vec![
                E("probesysfs", "input_probesysfs"),
                E("mtdev", "input_mtdev"),
                E("hidinput", "input_hidinput"),
                E("mouse", "input_mouse"),
                E("tuio", "input_tuio"),
            ],
            MacOs => vec![
                E("mactouch", "input_mactouch"),
                E("mouse", "input_mouse"),
                E("tuio", "input_tuio"),
            ],
            Android => vec![
                E("androidjoystick", "input_androidjoystick"),
                E("mouse", "input_mouse"),
            ],
            _ => vec![E("mouse", "input_mouse"), E("tuio", "input_tuio")],
        },
        Category::Text => match platform {
            Linux => vec![
                E("pango", "text_pango"),
                E("sdlttf", "text_sdlttf"),
                E("pil", "text_pil"),
            ],
            MacOs => vec![
                E("coretext", "text_coretext"),
                E("sdlttf", "text_sdlttf"),
                E("pil", "text_pil"),
            ],
            _ => vec![E("sdlttf", "text_sdlttf"), E("pil", "text_pil")],
        },
        Category::Audio => match platform {
            Linux => vec![E("gstreamer", "audio_gstreamer"), E("sdl", "audio_sdl")],
            MacOs => vec![E("avplayer", "audio_avplayer"), E("sdl", "audio_sdl")],
            Android => vec![E("android", "audio_android"), E("sdl", "audio_sdl")],
            _ => vec![E("sdl", "audio_sdl")],
        },
        Category::Video => match platform {
            Linux => vec![
                E("gstreamer", "video_gstreamer"),
                E("ffmpeg", "video_ffmpeg"),
                E("null", "video_null"),
            ],
            _ => vec![E("ffmpeg", "video_ffmpeg"), E("null", "video_null")],
        },
        Category::Camera => match platform {
            Linux => vec![E("gi", "camera_gi"), E("opencv", "camera_opencv")],
            MacOs => vec![
                E("avfoundation", "camera_avfoundation"),
                E("opencv", "camera_opencv"),
            ],
            Android => vec![E("android", "camera_android")],
            _ => vec![E("opencv", "camera_opencv")],
        },
        Category::Spelling => match platform {
            MacOs => vec![
                E("appkit", "spelling_appkit"),
                E("enchant", "spelling_enchant"),
            ],
            _ => vec![E("enchant", "spelling_enchant")],
        },
    }
}
