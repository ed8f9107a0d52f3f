fn main() {
    // Compile protobuf definitions
    tonic_build::configure()
        .compile_protos(&["proto/member.proto"], &["proto"])
        .unwrap_or_else(|e| panic!("Failed to compile protos {:?}", e));

    println!("cargo:rerun-if-changed=proto/member.proto");
}
