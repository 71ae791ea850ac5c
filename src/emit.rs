//! Artifact Emission - Deterministic LVGL C Modules
//!
//! Rendering is pure text generation; identical inputs yield identical
//! bytes. Writing to disk is the pipeline's job.

use crate::identifier::Identifier;
use crate::pack::PackedBitmap;

/// Pixel-format tag stamped into every descriptor, with or without source
/// transparency.
pub const PIXEL_FORMAT: &str = "LV_IMG_CF_ALPHA_1BIT";

/// Hex values per line in the generated byte array.
const VALUES_PER_LINE: usize = 16;

/// The two generated modules, ready to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    pub data_module: String,
    pub declaration_module: String,
}

/// Render the data module and the declaration module for one bitmap.
pub fn render(bitmap: &PackedBitmap, identifier: &Identifier) -> ArtifactPair {
    ArtifactPair {
        data_module: render_data_module(bitmap, identifier),
        declaration_module: render_declaration_module(identifier),
    }
}

fn render_data_module(bitmap: &PackedBitmap, identifier: &Identifier) -> String {
    let mut out = String::new();
    out.push_str("#include <lvgl.h>\n\n");
    out.push_str("#ifndef LV_ATTRIBUTE_MEM_ALIGN\n");
    out.push_str("#define LV_ATTRIBUTE_MEM_ALIGN\n");
    out.push_str("#endif\n\n");

    out.push_str(&format!(
        "const LV_ATTRIBUTE_MEM_ALIGN uint8_t {}[] = {{\n",
        identifier.map_symbol()
    ));
    let lines: Vec<String> = bitmap
        .data()
        .chunks(VALUES_PER_LINE)
        .map(|chunk| {
            let values: Vec<String> = chunk.iter().map(|byte| format!("0x{byte:02x}")).collect();
            format!("  {}", values.join(", "))
        })
        .collect();
    if !lines.is_empty() {
        out.push_str(&lines.join(",\n"));
        out.push('\n');
    }
    out.push_str("};\n\n");

    out.push_str(&format!("const lv_img_dsc_t {} = {{\n", identifier.base()));
    out.push_str("  .header.always_zero = 0,\n");
    out.push_str(&format!("  .header.w = {},\n", bitmap.width()));
    out.push_str(&format!("  .header.h = {},\n", bitmap.height()));
    out.push_str(&format!("  .data_size = {},\n", bitmap.data_size()));
    out.push_str(&format!("  .header.cf = {PIXEL_FORMAT},\n"));
    out.push_str(&format!("  .data = {},\n", identifier.map_symbol()));
    out.push_str("};\n");
    out
}

fn render_declaration_module(identifier: &Identifier) -> String {
    let guard = identifier.guard();
    let mut out = String::new();
    out.push_str(&format!("#ifndef {guard}\n"));
    out.push_str(&format!("#define {guard}\n\n"));
    out.push_str("#include <lvgl.h>\n\n");
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("extern \"C\" {\n");
    out.push_str("#endif\n\n");
    out.push_str(&format!(
        "extern const lv_img_dsc_t {};\n\n",
        identifier.base()
    ));
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("}\n");
    out.push_str("#endif\n\n");
    out.push_str(&format!("#endif /* {guard} */\n"));
    out
}
