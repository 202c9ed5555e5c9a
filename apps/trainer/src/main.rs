fn main() -> anyhow::Result<()> {
    english_quest::run()
}
