/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use archery::{SharedPointer, SharedPointerKind};

/// Takes the content out of `ptr`, cloning it only if some other pointer still shares it.
pub fn unwrap_or_clone<T: Clone, P>(ptr: SharedPointer<T, P>) -> T
where
    P: SharedPointerKind,
{
    SharedPointer::try_unwrap(ptr).unwrap_or_else(|shared| T::clone(&shared))
}
