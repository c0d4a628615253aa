//! Shared types used throughout the library.

mod shape;

pub use shape::{Shape, ShapeList};

/// Parse a resource location into namespace and path.
/// "minecraft:stone" -> ("minecraft", "stone")
/// "stone" -> ("minecraft", "stone")
pub fn parse_resource_location(resource_location: &str) -> (&str, &str) {
    if let Some((namespace, path)) = resource_location.split_once(':') {
        (namespace, path)
    } else {
        ("minecraft", resource_location)
    }
}

/// Registry path of a resource location, without its namespace.
pub fn resource_path(resource_location: &str) -> &str {
    parse_resource_location(resource_location).1
}

/// Simple name of an enum value's class, as reported by the JVM.
///
/// "net.minecraft.core.Direction$Axis$2" -> "Axis"
/// "net.minecraft.world.level.block.state.properties.RedstoneSide" -> "RedstoneSide"
pub fn simple_enum_class_name(class_name: &str) -> &str {
    let mut name = class_name.rsplit('.').next().unwrap_or(class_name);

    // Anonymous enum bodies compile to "Outer$Inner$1"
    while let Some((head, tail)) = name.rsplit_once('$') {
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            name = head;
        } else {
            break;
        }
    }

    name.rsplit('$').next().unwrap_or(name)
}
