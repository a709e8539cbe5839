use crate::models::{AppKind, DeviceClass, Size, Viewport};

pub trait Config {
    /// The viewport the shell starts with. Browser resizes are reported
    /// later through `Manager::set_viewport`.
    fn viewport(&self) -> Viewport;

    fn device_class(&self) -> DeviceClass;

    /// The floor for window extents, enforced at open time and on every
    /// resize update.
    fn min_window_size(&self) -> Size;

    /// Default window size for an app. The built-in per-device table is
    /// used unless a front-end overrides this with its own entries.
    fn app_size(&self, app: &AppKind) -> Size {
        app.default_size(self.device_class())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions)]
    pub struct TestConfig {
        pub viewport: Viewport,
        pub device_class: DeviceClass,
        pub min_window_size: Size,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                viewport: Viewport::new(1920, 1080, 40),
                device_class: DeviceClass::Desktop,
                min_window_size: Size::new(400, 300),
            }
        }
    }

    impl Config for TestConfig {
        fn viewport(&self) -> Viewport {
            self.viewport
        }
        fn device_class(&self) -> DeviceClass {
            self.device_class
        }
        fn min_window_size(&self) -> Size {
            self.min_window_size
        }
    }
}
