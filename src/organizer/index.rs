use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Category, Layout};
use crate::utils::write_file;

/// Render a category barrel: one default re-export per component, in order
pub fn render_category_index(category: &Category) -> String {
    category
        .components
        .iter()
        .map(|component| {
            format!(
                "export {{ default as {} }} from '{}';\n",
                component.name(),
                component.module_reference()
            )
        })
        .collect()
}

/// Render the root barrel re-exporting every listed category directory
pub fn render_root_index(categories: &[String]) -> String {
    categories
        .iter()
        .map(|category| format!("export * from './{}';\n", category))
        .collect()
}

/// Overwrite the barrel of every indexed category. Returns the written paths.
pub fn write_category_indices(base: &Path, layout: &Layout) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(layout.indices.len());

    for category in &layout.indices {
        let index_path = base.join(&category.name).join(&layout.index_file);
        write_file(&index_path, &render_category_index(category))?;
        println!("✓ Created {}/{}", category.name, layout.index_file);
        written.push(index_path);
    }

    Ok(written)
}

/// Overwrite the root aggregator barrel in the base directory
pub fn write_root_index(base: &Path, layout: &Layout) -> Result<PathBuf> {
    let root_index = base.join(&layout.index_file);
    write_file(&root_index, &render_root_index(&layout.root_exports))?;
    Ok(root_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Component;

    fn category(name: &str, components: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            components: components
                .iter()
                .map(|c| Component::new(c).unwrap())
                .collect(),
        }
    }

    #[test]
    fn category_barrel_keeps_list_order() {
        let rendered = render_category_index(&category("layout", &["PageHeader", "OptionCard"]));
        assert_eq!(
            rendered,
            "export { default as PageHeader } from './PageHeader';\n\
             export { default as OptionCard } from './OptionCard';\n"
        );
    }

    #[test]
    fn empty_category_renders_empty_barrel() {
        assert_eq!(render_category_index(&category("ui", &[])), "");
    }

    #[test]
    fn root_barrel_uses_fixed_order() {
        let layout = Layout::default();
        assert_eq!(
            render_root_index(&layout.root_exports),
            "export * from './common';\n\
             export * from './features';\n\
             export * from './layout';\n\
             export * from './ui';\n"
        );
    }
}
