fn main() {
    success_stories_frontend::start();
}
