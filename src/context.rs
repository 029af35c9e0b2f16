//! Environment-derived event context.
//!
//! Context is the app/device/locale metadata merged into capture events.
//! It comes from an injected [`ContextProvider`] rather than platform
//! introspection, so hosts decide what is exposed and tests can substitute
//! a fake provider.
//!
//! Sensitive mode uses a reduced context: app identity and library info
//! only, never device, screen, or locale data.

use crate::value::{Properties, Value};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

// Context property keys. These are fixed wire constants; downstream
// consumers match on them literally.
pub const APP_NAME: &str = "$app_name";
pub const APP_VERSION: &str = "$app_version";
pub const APP_BUILD: &str = "$app_build";
pub const APP_NAMESPACE: &str = "$app_namespace";
pub const DEVICE_MANUFACTURER: &str = "$device_manufacturer";
pub const DEVICE_TYPE: &str = "$device_type";
pub const DEVICE_MODEL: &str = "$device_model";
pub const OS_NAME: &str = "$os_name";
pub const OS_VERSION: &str = "$os_version";
pub const SCREEN_WIDTH: &str = "$screen_width";
pub const SCREEN_HEIGHT: &str = "$screen_height";
pub const LIB: &str = "$lib";
pub const LIB_VERSION: &str = "$lib_version";
/// Upstream key is `$local`, not `$locale`. Kept verbatim for compatibility.
pub const LOCAL: &str = "$local";
pub const LANGUAGE: &str = "$language";
pub const TIMEZONE: &str = "$timezone";

/// Source of context maps for payload construction.
pub trait ContextProvider {
    /// Full context merged into non-sensitive capture events.
    fn full_context(&self) -> Properties;

    /// Reduced context for sensitive events: app identity and library
    /// info only, so the event source is still tagged without leaking
    /// device-identifying data.
    fn sensitive_context(&self) -> Properties;
}

/// Application identity, as reported by the host.
///
/// Every field is optional; absent fields are omitted from the context
/// rather than reported as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub build: Option<String>,
    pub namespace: Option<String>,
}

/// Device and operating system identity, as reported by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub manufacturer: Option<String>,
    pub device_type: Option<String>,
    pub model: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
}

/// Screen dimensions in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenInfo {
    pub width: f64,
    pub height: f64,
}

/// Locale and timezone of the host environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleInfo {
    /// ISO language code, e.g. `en`
    pub language: Option<String>,
    /// ISO region code, e.g. `US`
    pub region: Option<String>,
    /// IANA timezone
    pub timezone: Option<Tz>,
}

/// Identity of the reporting library itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibInfo {
    pub name: String,
    pub version: String,
}

impl Default for LibInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A [`ContextProvider`] over fixed, host-supplied environment data.
///
/// The host assembles this once at startup from whatever platform APIs it
/// has access to; the provider itself never touches the platform. All info
/// structs are serde types, so hosts may also load them from configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticContextProvider {
    pub app: AppInfo,
    pub device: DeviceInfo,
    pub screen: Option<ScreenInfo>,
    pub locale: LocaleInfo,
    pub lib: LibInfo,
}

impl StaticContextProvider {
    pub fn new(app: AppInfo, device: DeviceInfo) -> Self {
        Self {
            app,
            device,
            ..Self::default()
        }
    }

    fn app_and_lib(&self, context: &mut Properties) {
        insert_opt(context, APP_NAME, &self.app.name);
        insert_opt(context, APP_VERSION, &self.app.version);
        insert_opt(context, APP_BUILD, &self.app.build);
        insert_opt(context, APP_NAMESPACE, &self.app.namespace);

        context.insert(LIB.to_string(), Value::from(self.lib.name.clone()));
        context.insert(
            LIB_VERSION.to_string(),
            Value::from(self.lib.version.clone()),
        );
    }
}

impl ContextProvider for StaticContextProvider {
    fn full_context(&self) -> Properties {
        let mut context = Properties::new();
        self.app_and_lib(&mut context);

        insert_opt(&mut context, DEVICE_MANUFACTURER, &self.device.manufacturer);
        insert_opt(&mut context, DEVICE_TYPE, &self.device.device_type);
        insert_opt(&mut context, DEVICE_MODEL, &self.device.model);
        insert_opt(&mut context, OS_NAME, &self.device.os_name);
        insert_opt(&mut context, OS_VERSION, &self.device.os_version);

        if let Some(screen) = self.screen {
            context.insert(SCREEN_WIDTH.to_string(), Value::from(screen.width));
            context.insert(SCREEN_HEIGHT.to_string(), Value::from(screen.height));
        }

        if let Some(ref lang) = self.locale.language {
            let local = match self.locale.region {
                Some(ref region) => format!("{lang}-{region}"),
                None => lang.clone(),
            };
            context.insert(LOCAL.to_string(), Value::from(local));
            context.insert(LANGUAGE.to_string(), Value::from(lang.clone()));
        }
        if let Some(tz) = self.locale.timezone {
            context.insert(TIMEZONE.to_string(), Value::from(tz.name()));
        }

        context
    }

    fn sensitive_context(&self) -> Properties {
        let mut context = Properties::new();
        self.app_and_lib(&mut context);
        context
    }
}

fn insert_opt(context: &mut Properties, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        context.insert(key.to_string(), Value::from(v.clone()));
    }
}
