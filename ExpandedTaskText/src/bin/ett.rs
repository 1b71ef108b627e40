fn main() -> anyhow::Result<()> {
    expanded_task_text::cli::run_cli()
}
