//! 文本解码模块
//!
//! 题目 API 为了安全传输特殊字符，对文本做了两层转义：
//! 先 HTML 实体编码，再百分号编码。解码时按相同顺序还原：
//! 先解 HTML 实体（`&quot;` → `"`，`&#039;` → `'`），
//! 再解百分号编码（`%27` → `'`）

/// 解码两层转义文本
///
/// # 参数
/// - `text`: 转义后的原始文本
///
/// # 返回
/// 返回解码后的展示文本
///
/// 对已解码、不含转义序列的文本是幂等的；
/// 无法识别的序列按解码原语的默认行为原样保留
/// （百分号序列解出非法 UTF-8 时整体保持不变）
pub fn decode(text: &str) -> String {
    let unescaped = html_escape::decode_html_entities(text);

    // 百分号解码失败（非法 UTF-8）时保留 HTML 解码结果
    let unquoted = urlencoding::decode(&unescaped).map(|s| s.into_owned()).ok();
    match unquoted {
        Some(decoded) => decoded,
        None => unescaped.into_owned(),
    }
}

/// 解码并返回字符数（展示长度按字符计，不按字节计）
pub fn decoded_char_count(text: &str) -> usize {
    decode(text).chars().count()
}
