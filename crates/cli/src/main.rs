fn main() -> anyhow::Result<()> {
    jstruct_cli::run()
}
