use super::index::DocIndex;
use super::signature::METHOD_MARKER;
use crate::error::DiscoveryError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Documentation file that accompanies a compiled artifact.
///
/// Same base name, `xml` extension: `bin/Api.dll` becomes `bin/Api.xml` and
/// an extensionless `target/release/api` becomes `target/release/api.xml`.
pub fn documentation_path_for(artifact: &Path) -> PathBuf {
    artifact.with_extension("xml")
}

/// Load and index a documentation file.
///
/// Fails with [`DiscoveryError::DocumentationMissing`] when the file does not
/// exist; there is no empty-index fallback.
pub fn load_doc_index(path: impl AsRef<Path>) -> Result<DocIndex, DiscoveryError> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DiscoveryError::DocumentationMissing {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(DiscoveryError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let index = parse_doc_index(path, &content)?;
    debug!(
        path = %path.display(),
        entries = index.len(),
        "loaded documentation index"
    );
    Ok(index)
}

#[derive(Default)]
struct PendingMember {
    name: String,
    summary: Option<String>,
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Parse documentation XML already read from `path`.
///
/// `path` is only used in error messages.
pub fn parse_doc_index(path: &Path, content: &str) -> Result<DocIndex, DiscoveryError> {
    let malformed = |reason: String| DiscoveryError::MalformedDocumentation {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = Reader::from_str(content);
    let mut index = DocIndex::new();
    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut saw_members = false;
    let mut member: Option<PendingMember> = None;
    // Depth of the open <summary> element while its text is being collected.
    let mut summary_depth: Option<usize> = None;
    let mut summary_text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(format!("XML error at byte {}: {e}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                let name = element_name(&e);
                if !saw_root {
                    if name != "doc" {
                        return Err(malformed(format!("expected root <doc>, found <{name}>")));
                    }
                    saw_root = true;
                }
                open_element(&name, &e, &stack, &mut member, &mut saw_members)
                    .map_err(&malformed)?;
                stack.push(name);
                if summary_depth.is_none()
                    && stack.len() == 4
                    && stack[3] == "summary"
                    && member.as_ref().is_some_and(|m| m.summary.is_none())
                {
                    summary_depth = Some(stack.len());
                    summary_text.clear();
                }
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                if !saw_root {
                    if name != "doc" {
                        return Err(malformed(format!("expected root <doc>, found <{name}/>")));
                    }
                    saw_root = true;
                }
                open_element(&name, &e, &stack, &mut member, &mut saw_members)
                    .map_err(&malformed)?;
                if stack.len() == 2 && name == "member" {
                    if let Some(done) = member.take() {
                        finish_member(path, done, &mut index)?;
                    }
                } else if stack.len() == 3 && name == "summary" {
                    if let Some(m) = member.as_mut() {
                        m.summary.get_or_insert_with(String::new);
                    }
                }
            }
            Event::Text(t) if summary_depth.is_some() => {
                let text = t
                    .unescape()
                    .map_err(|e| malformed(format!("bad text in summary: {e}")))?;
                summary_text.push_str(&text);
            }
            Event::CData(c) if summary_depth.is_some() => {
                summary_text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Event::End(_) => {
                if summary_depth == Some(stack.len()) {
                    summary_depth = None;
                    if let Some(m) = member.as_mut() {
                        m.summary = Some(std::mem::take(&mut summary_text));
                    }
                }
                let closed = stack.pop();
                if stack.len() == 2 && closed.as_deref() == Some("member") {
                    if let Some(done) = member.take() {
                        finish_member(path, done, &mut index)?;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(malformed("document has no root element".to_string()));
    }
    if let Some(open) = stack.last() {
        return Err(malformed(format!("unexpected end of file inside <{open}>")));
    }
    if !saw_members {
        return Err(malformed("<doc> has no <members> element".to_string()));
    }
    Ok(index)
}

fn open_element(
    name: &str,
    e: &BytesStart<'_>,
    stack: &[String],
    member: &mut Option<PendingMember>,
    saw_members: &mut bool,
) -> Result<(), String> {
    match (stack.len(), name) {
        (1, "members") => *saw_members = true,
        (2, "member") if stack[1] == "members" => {
            let attr = e
                .try_get_attribute("name")
                .map_err(|err| format!("bad <member> attribute: {err}"))?
                .ok_or_else(|| "<member> without a name attribute".to_string())?;
            let value = attr
                .unescape_value()
                .map_err(|err| format!("bad <member> name: {err}"))?;
            *member = Some(PendingMember {
                name: value.into_owned(),
                summary: None,
            });
        }
        _ => {}
    }
    Ok(())
}

fn finish_member(
    path: &Path,
    member: PendingMember,
    index: &mut DocIndex,
) -> Result<(), DiscoveryError> {
    if !member.name.starts_with(METHOD_MARKER) {
        return Ok(());
    }
    let summary = member
        .summary
        .ok_or_else(|| DiscoveryError::MalformedDocumentation {
            path: path.to_path_buf(),
            reason: format!("method member '{}' has no <summary>", member.name),
        })?;
    index
        .try_insert(&member.name, &summary)
        .map_err(|key| DiscoveryError::DuplicateSignature {
            path: path.to_path_buf(),
            key,
        })
}
