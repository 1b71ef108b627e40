//! CLI command for showing mod metadata

use crate::metadata::ModMetadata;

pub fn execute() {
    let meta = ModMetadata::current();
    println!("{} v{}", meta.name, meta.version);
    println!("  GUID:      {}", meta.guid);
    println!("  Author:    {}", meta.author);
    println!("  Server:    {}", meta.server_version);
    println!("  License:   {}", meta.license);
    println!("  Resources: {}", ModMetadata::resources_directory().display());
}
