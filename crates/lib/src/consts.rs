pub const DEFAULT_PRESET: &str = "default";
pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_EXECUTABLE: &str = "Engine";

/// C++ standard requested from the package manager.
pub const CPP_STANDARD: &str = "20";
/// `--build` policy for conan: compile only what has no prebuilt binary.
pub const BUILD_MISSING_POLICY: &str = "missing";

pub const CONAN: &str = "conan";
pub const CMAKE: &str = "cmake";
pub const DOT: &str = "dot";

pub const BUILD_DIR: &str = "build";
pub const GRAPHVIZ_DIR: &str = "graphviz";
pub const DOCS_DIR: &str = "docs";
pub const GRAPH_NAME: &str = "dependencies";

pub const DEFAULT_VULKAN_SDK_VERSION: &str = "1.4.335.1";
