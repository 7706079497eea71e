// This is a metapackage for the workspace-level session tests
// The ledger functionality lives in the member crates

pub mod session {
    #[cfg(test)]
    mod tests {
        #[test]
        fn metapackage_builds() {
            assert!(true);
        }
    }
}
