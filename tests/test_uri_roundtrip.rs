// Path <-> URI conversion and key normalization across target platforms.

use rstest::rstest;
use vfsync::{TargetOs, Uri, file_path_to_uri, normalize, uri_to_file_path};

#[rstest]
#[case::posix_plain("/home/user/Main.hs")]
#[case::posix_space("/tmp/with space/A.hs")]
#[case::posix_unicode("/srv/données/λ.hs")]
#[case::posix_reserved("/work/a#b?c%d.hs")]
#[case::relative_plain("src/Main.hs")]
#[case::relative_space("my dir/a.hs")]
#[case::relative_unicode("données/λ.hs")]
fn posix_paths_survive_a_round_trip(#[case] path: &str) {
    let uri = file_path_to_uri(path, TargetOs::Unix);
    assert!(uri.as_str().starts_with("file://"), "got {}", uri);

    let back = uri_to_file_path(&uri, TargetOs::Unix).unwrap();
    assert_eq!(back.as_deref(), Some(path));
}

#[rstest]
#[case::drive_root_file("C:\\Main.hs")]
#[case::nested("C:\\Users\\me\\project\\Main.hs")]
#[case::space("D:\\My Documents\\a b.hs")]
fn windows_paths_survive_a_round_trip(#[case] path: &str) {
    let uri = file_path_to_uri(path, TargetOs::Windows);
    assert!(uri.as_str().starts_with("file:///"), "got {}", uri);

    let back = uri_to_file_path(&uri, TargetOs::Windows).unwrap();
    assert_eq!(back.as_deref(), Some(path));
}

#[test]
fn windows_drive_letters_are_upper_cased() {
    let uri = file_path_to_uri("c:\\src\\Main.hs", TargetOs::Windows);
    assert_eq!(uri.as_str(), "file:///C:/src/Main.hs");
}

#[test]
fn windows_accepts_forward_slashes() {
    let uri = file_path_to_uri("C:/src/Main.hs", TargetOs::Windows);
    assert_eq!(uri.as_str(), "file:///C:/src/Main.hs");
}

#[test]
fn non_file_uris_have_no_path() {
    let uri = Uri::new("untitled:Untitled-1");
    assert_eq!(uri_to_file_path(&uri, TargetOs::Unix).unwrap(), None);
    assert_eq!(uri_to_file_path(&uri, TargetOs::Windows).unwrap(), None);
}

#[test]
fn windows_root_without_segments_is_an_error() {
    let err = uri_to_file_path(&Uri::new("file:///"), TargetOs::Windows).unwrap_err();
    assert!(matches!(err, vfsync::VfsError::EmptyPathSegments { .. }));
}

#[rstest]
#[case(TargetOs::Unix, "file:///tmp/a%20b.hs", "file:///tmp/a b.hs")]
#[case(TargetOs::Unix, "file:///tmp/%41.hs", "file:///tmp/A.hs")]
#[case(TargetOs::Windows, "file:///c%3A/x/Main.hs", "file:///C:/x/Main.hs")]
#[case(TargetOs::Windows, "file:///c:/x/Main.hs", "file:///C:/x/Main.hs")]
fn spelling_variants_share_one_key(#[case] os: TargetOs, #[case] a: &str, #[case] b: &str) {
    assert_eq!(
        normalize(&Uri::new(a), os).unwrap(),
        normalize(&Uri::new(b), os).unwrap()
    );
}

#[rstest]
#[case(TargetOs::Unix, "file:///tmp/a%20b.hs")]
#[case(TargetOs::Windows, "file:///C:/Users/me/Main.hs")]
#[case(TargetOs::Unix, "untitled:Untitled-1")]
fn normalization_is_idempotent(#[case] os: TargetOs, #[case] raw: &str) {
    let once = normalize(&Uri::new(raw), os).unwrap();
    let twice = normalize(&vfsync::denormalize(&once), os).unwrap();
    assert_eq!(once, twice);
}
