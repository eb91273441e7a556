/// Create every node, then attach them in order.
///
/// Nothing is attached unless every node was created. If an attach fails, the
/// nodes attached so far are detached again before the error is returned.
pub fn mount_all<N, E>(
    count: usize,
    mut create: impl FnMut(usize) -> Result<N, E>,
    mut attach: impl FnMut(&N) -> Result<(), E>,
    mut detach: impl FnMut(&N),
) -> Result<Vec<N>, E> {
    let nodes = (0..count).map(&mut create).collect::<Result<Vec<N>, E>>()?;

    for (attached, node) in nodes.iter().enumerate() {
        if let Err(e) = attach(node) {
            nodes[..attached].iter().for_each(&mut detach);
            return Err(e);
        }
    }

    Ok(nodes)
}
