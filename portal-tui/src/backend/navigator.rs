//! 系统浏览器导航器

use portal_core::ExternalNavigator;

/// 用系统默认浏览器打开地址
///
/// 打开失败只记录日志，不向调用方报告。
pub struct SystemBrowserNavigator;

impl ExternalNavigator for SystemBrowserNavigator {
    fn open_external(&self, url: &str) {
        if let Err(e) = open::that(url) {
            log::error!("Failed to open {url} in the system browser: {e}");
        }
    }
}
