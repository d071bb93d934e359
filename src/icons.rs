// src/icons.rs

/// Glifos disponibles. Cualquier nombre cae siempre en el mismo.
pub const GLYPHS: [&str; 16] = [
    "⚛", "🧪", "📐", "🔭", "⚙", "🧲", "💡", "🌊", "🔬", "📊", "🧮", "🌡", "⚡", "🔥", "📘", "🌍",
];

/// Hash clásico `c + (h << 5) - h` sobre unidades UTF-16, en 32 bits
pub fn hash_name(name: &str) -> u32 {
    let hash = name
        .encode_utf16()
        .fold(0i32, |h, c| (c as i32).wrapping_add(h.wrapping_shl(5).wrapping_sub(h)));
    hash.unsigned_abs()
}

pub fn glyph_for(name: &str) -> &'static str {
    GLYPHS[hash_name(name) as usize % GLYPHS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_glyph() {
        assert_eq!(glyph_for("Rotational Motion"), glyph_for("Rotational Motion"));
        assert_eq!(glyph_for("physics"), glyph_for("physics"));
    }

    #[test]
    fn known_hash_values() {
        assert_eq!(hash_name(""), 0);
        assert_eq!(hash_name("a"), 97);
        // 97 * 31 + 98
        assert_eq!(hash_name("ab"), 3105);
    }

    #[test]
    fn hash_wraps_instead_of_overflowing() {
        let long = "Continuity and Differentiability".repeat(8);
        let glyph = glyph_for(&long);
        assert!(GLYPHS.contains(&glyph));
    }
}
