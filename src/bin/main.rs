fn main() {
  intake::main();
}
