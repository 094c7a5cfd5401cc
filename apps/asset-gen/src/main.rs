fn main() -> anyhow::Result<()> {
    asset_gen::run()
}
