fn main() {
    // Emits the ESP-IDF link/env directives when building for the target.
    // On host builds the saved sysenv is absent and this emits nothing.
    embuild::espidf::sysenv::output();
}
