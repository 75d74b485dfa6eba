fn main() {
    // Mounts on DOMContentLoaded, or right away if the page is already parsed.
    chat_widget::bootstrap();
}
