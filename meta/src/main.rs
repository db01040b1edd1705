fn main() {
    multiversx_sc_meta_lib::cli_main::<approval_gate::AbiProvider>();
}
