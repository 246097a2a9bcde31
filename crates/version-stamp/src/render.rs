use crate::VersionLabel;

pub const DEFAULT_TEXT_PATH: &str = "version.txt";
pub const DEFAULT_HEADER_PATH: &str = "include/version.h";
pub const DEFAULT_MACRO_NAME: &str = "CURRENT_VERSION";

// Downstream firmware builds read both files literally. Keep the bytes stable.

pub fn render_text(label: &VersionLabel) -> String {
    format!("{label}\n")
}

pub fn render_header(label: &VersionLabel, macro_name: &str) -> String {
    format!("#pragma once\n#define {macro_name} \"{label}\"\n")
}

pub fn render_announcement(label: &VersionLabel) -> String {
    format!("// 🔧 Build Version: {label}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_label_plus_single_newline() {
        assert_eq!(render_text(&VersionLabel::new("17")), "v17\n");
    }

    #[test]
    fn header_has_exactly_two_lines() {
        let header = render_header(&VersionLabel::new("17"), DEFAULT_MACRO_NAME);
        assert_eq!(
            header.lines().collect::<Vec<_>>(),
            vec!["#pragma once", "#define CURRENT_VERSION \"v17\""]
        );
        assert!(header.ends_with('\n'));
    }

    #[test]
    fn header_honours_macro_name() {
        let header = render_header(&VersionLabel::new("dev"), "FW_VERSION");
        assert_eq!(header, "#pragma once\n#define FW_VERSION \"vdev\"\n");
    }

    #[test]
    fn announcement_mentions_label() {
        assert_eq!(
            render_announcement(&VersionLabel::new("dev")),
            "// 🔧 Build Version: vdev"
        );
    }
}
