fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows" {
        let mut res = winres::WindowsResource::new();
        res.set("FileDescription", "Hexagon Draw Test");
        res.set("ProductName", "Hexagon Draw Test");
        res.compile().expect("Failed to compile Windows resources");
    }
}
