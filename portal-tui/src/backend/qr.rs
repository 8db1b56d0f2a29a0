//! 二维码文本渲染

use qrcode::render::unicode;
use qrcode::QrCode;

/// 把地址渲染成半高块字符组成的二维码
///
/// 深色终端背景下颜色反转，保证扫描时模块为深色。
#[derive(Debug, Clone, Copy, Default)]
pub struct QrTextRenderer;

impl QrTextRenderer {
    /// 渲染失败（地址过长等）返回 `None`
    pub fn render(&self, value: &str) -> Option<String> {
        let code = match QrCode::new(value.as_bytes()) {
            Ok(code) => code,
            Err(e) => {
                log::warn!("Cannot encode '{value}' as a QR code: {e}");
                return None;
            }
        };

        let image = code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build();
        Some(image)
    }
}
