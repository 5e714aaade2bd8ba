pub mod books;

use bookshelf_db::BookStoreArc;
use bookshelf_kernel::ModuleRegistry;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, store: BookStoreArc) -> anyhow::Result<()> {
    registry.register(books::create_module(store))
}
