use plum_checkers::protocol::command_loop::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
