//! The page written by this tool and where it goes by default.

/// Server component for the back-office settings page.
pub const PAGE_CONTENT: &str = concat!(
    "import { getAdmins } from \"./actions\";\n",
    "import AdminsClient from \"./_components/AdminsClient\";\n",
    "\n",
    "export default async function ReglagesPage() {\n",
    "  const { data: admins = [], error } = await getAdmins();\n",
    "  return <AdminsClient initialAdmins={admins} fetchError={error} />;\n",
    "}\n",
);

/// Relative to the Next.js package root.
pub const DEFAULT_DESTINATION: &str = "src/app/(backoffice)/reglages/page.tsx";
